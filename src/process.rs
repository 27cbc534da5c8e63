//! Process abstraction
//! ChainedProcess is monomorphised: the compiler knows the concrete type of
//! every stage and can inline the whole chain.
//! DynamicProcess is the runtime-assembled fallback used when the stage list
//! depends on caller switches.
use crate::{
    context::Context,
    stage::{Stage, trim::Trim},
};
use smallvec::SmallVec;
use std::{borrow::Cow, sync::Arc};

pub trait Process: Send + Sync {
    fn process<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str>;

    /// Stage names in execution order.
    fn stage_names(&self) -> Vec<&'static str>;
}

pub struct EmptyProcess;

impl Process for EmptyProcess {
    #[inline(always)]
    fn process<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Cow<'a, str> {
        text
    }

    fn stage_names(&self) -> Vec<&'static str> {
        Vec::new()
    }
}

pub struct ChainedProcess<S: Stage, P: Process> {
    pub stage: S,
    pub previous: P,
}

impl<S: Stage, P: Process> Process for ChainedProcess<S, P> {
    #[inline(always)]
    fn process<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        let current = self.previous.process(text, ctx);
        if !self.stage.needs_apply(&current, ctx) {
            return current;
        }
        log::trace!("applying stage `{}`", self.stage.name());
        self.stage.apply(current, ctx)
    }

    fn stage_names(&self) -> Vec<&'static str> {
        let mut names = self.previous.stage_names();
        names.push(self.stage.name());
        names
    }
}

#[derive(Default, Clone)]
pub struct DynamicProcess {
    pub(crate) stages: SmallVec<[Arc<dyn Stage>; 8]>,
}

impl DynamicProcess {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn push<T: Stage + 'static>(mut self, stage: T) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }
}

impl Process for DynamicProcess {
    #[inline(always)]
    fn process<'a>(&self, mut text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        for stage in &self.stages {
            if !stage.needs_apply(&text, ctx) {
                continue;
            }
            log::trace!("applying stage `{}`", stage.name());
            text = stage.apply(text, ctx);
        }
        text
    }

    fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }
}

/// Line policy wrapper: strip the line edges, stop on an empty line, and run
/// `rest` otherwise.
pub struct TrimmedLine<P: Process> {
    pub rest: P,
}

impl<P: Process> TrimmedLine<P> {
    pub fn new(rest: P) -> Self {
        Self { rest }
    }
}

impl<P: Process> Process for TrimmedLine<P> {
    #[inline]
    fn process<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        let line = if Trim.needs_apply(&text, ctx) {
            Trim.apply(text, ctx)
        } else {
            text
        };
        if line.is_empty() {
            return line;
        }
        self.rest.process(line, ctx)
    }

    fn stage_names(&self) -> Vec<&'static str> {
        let mut names = vec![Trim.name()];
        names.extend(self.rest.stage_names());
        names
    }
}
