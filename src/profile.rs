pub mod preset;
use crate::{
    context::Context,
    process::{ChainedProcess, DynamicProcess, EmptyProcess, Process, TrimmedLine},
    stage::Stage,
};
use std::borrow::Cow;

/// A named, ready-to-run pipeline.
pub struct Profile<P: Process> {
    name: &'static str,
    pipeline: P,
}

impl<P: Process> Profile<P> {
    pub(crate) fn from_process(name: &'static str, pipeline: P) -> Self {
        log::debug!(
            "built profile `{name}`: [{}]",
            pipeline.stage_names().join(", ")
        );
        Self { name, pipeline }
    }

    #[inline]
    pub fn run<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        self.pipeline.process(text, ctx)
    }

    #[inline]
    pub fn run_str<'a>(&self, text: &'a str, ctx: &Context) -> Cow<'a, str> {
        self.run(Cow::Borrowed(text), ctx)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.pipeline.stage_names()
    }
}

impl Profile<EmptyProcess> {
    pub fn builder(name: &'static str) -> ProfileBuilder<EmptyProcess> {
        ProfileBuilder::new(name)
    }
}

pub struct ProfileBuilder<P: Process> {
    name: &'static str,
    current: P,
}

impl ProfileBuilder<EmptyProcess> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            current: EmptyProcess,
        }
    }
}

impl<P: Process> ProfileBuilder<P> {
    pub fn add_stage<S: Stage + 'static>(self, stage: S) -> ProfileBuilder<ChainedProcess<S, P>> {
        ProfileBuilder {
            name: self.name,
            current: ChainedProcess {
                stage,
                previous: self.current,
            },
        }
    }

    pub fn build(self) -> Profile<P> {
        Profile::from_process(self.name, self.current)
    }

    /// Build behind the line policy (trim, stop on empty).
    pub fn build_line(self) -> Profile<TrimmedLine<P>> {
        Profile::from_process(self.name, TrimmedLine::new(self.current))
    }
}

impl Profile<DynamicProcess> {
    pub fn plugin_builder(name: &'static str) -> DynProfileBuilder {
        DynProfileBuilder {
            name,
            pipeline: DynamicProcess::new(),
        }
    }
}

/// Runtime-assembled counterpart of [`ProfileBuilder`], for stage lists that
/// depend on caller switches.
pub struct DynProfileBuilder {
    name: &'static str,
    pipeline: DynamicProcess,
}

impl DynProfileBuilder {
    pub fn add_stage<T: Stage + 'static>(self, stage: T) -> Self {
        Self {
            pipeline: self.pipeline.push(stage),
            ..self
        }
    }

    /// Add `stage` only when `enabled` holds.
    pub fn add_stage_if<T: Stage + 'static>(self, enabled: bool, stage: T) -> Self {
        if enabled { self.add_stage(stage) } else { self }
    }

    pub fn build(self) -> Profile<DynamicProcess> {
        Profile::from_process(self.name, self.pipeline)
    }

    pub fn build_line(self) -> Profile<TrimmedLine<DynamicProcess>> {
        Profile::from_process(self.name, TrimmedLine::new(self.pipeline))
    }
}
