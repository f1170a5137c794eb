use thiserror::Error;

pub const EXIT_CODE_OK: i32 = 0;
pub const EXIT_CODE_FAILURE: i32 = 1;

/// A unit of work that is only run when the runner asks for it.
pub trait DeferredComputation {
    fn call(&self) -> anyhow::Result<i32>;
}

impl<F> DeferredComputation for F
where
    F: Fn() -> anyhow::Result<i32>,
{
    fn call(&self) -> anyhow::Result<i32> {
        self()
    }
}

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("No computation configured on the command runner.")]
    NotConfigured,
}

/// Separates what a CLI invocation does from how its result becomes an exit status.
#[derive(Default)]
pub struct CommandRunner {
    do_call: Option<Box<dyn DeferredComputation>>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_do_call(&mut self, computation: impl DeferredComputation + 'static) {
        self.do_call = Some(Box::new(computation));
    }

    /// Invokes the configured computation once. Its result, or its error, is
    /// returned untouched.
    pub fn run(&self) -> anyhow::Result<i32> {
        let computation = self.do_call.as_ref().ok_or(RunnerError::NotConfigured)?;
        computation.call()
    }
}

/// Maps a run result to the process exit status.
pub fn exit_code(result: anyhow::Result<i32>) -> i32 {
    match result {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{:#}", e);
            EXIT_CODE_FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use std::cell::Cell;
    use std::rc::Rc;

    struct FakeComputation {
        result: i32,
        fail: bool,
        calls: Rc<Cell<usize>>,
    }

    impl DeferredComputation for FakeComputation {
        fn call(&self) -> anyhow::Result<i32> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                bail!("analysis failed");
            }
            Ok(self.result)
        }
    }

    fn runner_with(result: i32, fail: bool) -> (CommandRunner, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        let mut runner = CommandRunner::new();
        runner.set_do_call(FakeComputation {
            result,
            fail,
            calls: Rc::clone(&calls),
        });
        (runner, calls)
    }

    #[test]
    fn run_returns_computation_result() {
        for expected in [0, 1, 42, -7, i32::MAX, i32::MIN] {
            let (runner, calls) = runner_with(expected, false);
            assert_eq!(runner.run().unwrap(), expected);
            assert_eq!(calls.get(), 1);
        }
    }

    #[test]
    fn each_run_invokes_once() {
        let (runner, calls) = runner_with(3, false);
        runner.run().unwrap();
        runner.run().unwrap();
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn nothing_invoked_without_run() {
        let (_runner, calls) = runner_with(3, false);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn failure_is_propagated_verbatim() {
        let (runner, calls) = runner_with(0, true);
        let err = runner.run().unwrap_err();
        assert_eq!(err.to_string(), "analysis failed");
        assert_eq!(err.chain().count(), 1);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn closures_are_computations() {
        let mut runner = CommandRunner::new();
        runner.set_do_call(|| Ok(EXIT_CODE_OK));
        assert_eq!(runner.run().unwrap(), EXIT_CODE_OK);
    }

    #[test]
    fn unconfigured_runner_fails() {
        let err = CommandRunner::new().run().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RunnerError>(),
            Some(RunnerError::NotConfigured)
        ));
    }

    #[test]
    fn exit_code_maps_failures_to_non_zero() {
        assert_eq!(exit_code(Ok(5)), 5);
        assert_eq!(exit_code(Err(anyhow::anyhow!("boom"))), EXIT_CODE_FAILURE);
    }
}
