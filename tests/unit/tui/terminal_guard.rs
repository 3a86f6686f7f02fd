use super::*;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct MockOps {
    calls: Mutex<Vec<&'static str>>,
}

impl TerminalOps for MockOps {
    fn setup(&self) -> std::io::Result<()> {
        self.calls.lock().unwrap().push("setup");
        Ok(())
    }

    fn restore(&self) -> std::io::Result<()> {
        self.calls.lock().unwrap().push("restore");
        Ok(())
    }
}

#[test]
fn terminal_guard_restores_on_drop() {
    let ops = Arc::new(MockOps::default());
    {
        let _guard = TerminalGuard::with_ops(ops.clone()).unwrap();
    }

    assert_eq!(&*ops.calls.lock().unwrap(), &["setup", "restore"]);
}

#[test]
fn terminal_restorer_is_idempotent() {
    let ops = Arc::new(MockOps::default());
    let guard = TerminalGuard::with_ops(ops.clone()).unwrap();
    let restorer = guard.restorer();

    restorer.restore().unwrap();
    restorer.restore().unwrap();
    drop(guard);

    assert_eq!(&*ops.calls.lock().unwrap(), &["setup", "restore"]);
}

#[test]
fn restore_failure_is_reported_once() {
    struct FailingOps;

    impl TerminalOps for FailingOps {
        fn setup(&self) -> std::io::Result<()> {
            Ok(())
        }

        fn restore(&self) -> std::io::Result<()> {
            Err(std::io::Error::other("tty gone"))
        }
    }

    let guard = TerminalGuard::with_ops(Arc::new(FailingOps)).unwrap();
    let restorer = guard.restorer();
    assert!(restorer.restore().is_err());
    assert!(restorer.restore().is_ok());
}

#[test]
fn signals_map_to_shell_exit_codes() {
    assert_eq!(TerminationSignal::SigInt.exit_code(), 130);
    assert_eq!(TerminationSignal::SigTerm.exit_code(), 143);
    assert_eq!(TerminationSignal::SigTerm.name(), "SIGTERM");
}
