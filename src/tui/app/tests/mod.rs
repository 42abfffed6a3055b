pub(crate) use super::*;
pub(crate) use crate::tui::test_utils::{ctrl_c, MockConsole, Scripted, TerminalMode};
pub(crate) use crate::widgets::text_view::{DisplayBuffer, TextView};


/// Options for tests: fast ticks, no process-wide signal handler.
pub(crate) fn test_options() -> ShellOptions {
    ShellOptions {
        tick_rate: Duration::from_millis(10),
        catch_signals: false,
    }
}

pub(crate) fn make_shell(console: MockConsole) -> Shell<MockConsole> {
    let mut shell = Shell::new(console, test_options());
    shell.set_root(TextView::new(DisplayBuffer::default()), true);
    shell
}
