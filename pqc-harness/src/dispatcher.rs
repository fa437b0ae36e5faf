//! Interactive menu loop
//!
//! The current menu is an explicit [`MenuState`] value handed from one
//! [`Dispatcher::step`] to the next. Nothing else persists between runs: each
//! workflow acquires and releases its own sessions.

use crate::catalog;
use crate::config::HarnessSettings;
use crate::error::{HarnessError, Result};
use crate::render;
use crate::types::{AlgorithmParameter, Family, RunReport};
use crate::workflow::{run_key_exchange, run_signature};
use pqc_primitives::PrimitiveProvider;
use std::io::{BufRead, Write};
use tracing::debug;

/// Menu states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    MainMenu,
    KemSubmenu,
    SignatureSubmenu,
    /// Fixed SLH-DSA path, goes straight to the message prompt
    SlhDsa,
    Exit,
}

/// Drives the menu loop over any line source and sink
pub struct Dispatcher<'a, P: ?Sized, R, W> {
    provider: &'a P,
    input: R,
    output: W,
    settings: HarnessSettings,
}

impl<'a, P, R, W> Dispatcher<'a, P, R, W>
where
    P: PrimitiveProvider + ?Sized,
    R: BufRead,
    W: Write,
{
    pub fn new(provider: &'a P, input: R, output: W, settings: HarnessSettings) -> Self {
        Self {
            provider,
            input,
            output,
            settings,
        }
    }

    /// Loop from the main menu until the exit selection or end of input
    ///
    /// Selection and workflow errors are reported and recovered inside the
    /// loop. Only console I/O errors end it early.
    pub fn run(&mut self) -> Result<()> {
        let mut state = MenuState::MainMenu;

        while state != MenuState::Exit {
            state = self.step(state)?;
        }

        writeln!(self.output, "{}", render::FAREWELL)?;
        self.output.flush()?;
        Ok(())
    }

    /// Process one menu interaction and return the next state
    pub fn step(&mut self, state: MenuState) -> Result<MenuState> {
        match state {
            MenuState::MainMenu => self.main_menu(),
            MenuState::KemSubmenu => self.kem_submenu(),
            MenuState::SignatureSubmenu => self.signature_submenu(),
            MenuState::SlhDsa => self.slh_dsa(),
            MenuState::Exit => Ok(MenuState::Exit),
        }
    }

    /// Consume the dispatcher and hand back the output sink
    pub fn into_output(self) -> W {
        self.output
    }

    fn main_menu(&mut self) -> Result<MenuState> {
        render::main_menu(&mut self.output)?;
        let line = match self.read_choice()? {
            Some(line) => line,
            None => return Ok(MenuState::Exit),
        };

        let next = match catalog::parse_selection("main menu", &line) {
            Ok(1) => MenuState::KemSubmenu,
            Ok(2) => MenuState::SignatureSubmenu,
            Ok(3) => MenuState::SlhDsa,
            Ok(4) => MenuState::Exit,
            Ok(index) => {
                self.report_invalid(&HarnessError::InvalidSelection {
                    menu: "main menu",
                    input: index.to_string(),
                })?;
                MenuState::MainMenu
            }
            Err(e) => {
                self.report_invalid(&e)?;
                MenuState::MainMenu
            }
        };

        Ok(next)
    }

    fn kem_submenu(&mut self) -> Result<MenuState> {
        let parameter = match self.select_parameter(Family::Kem)? {
            Selection::Chosen(parameter) => parameter,
            Selection::Retry => return Ok(MenuState::KemSubmenu),
            Selection::EndOfInput => return Ok(MenuState::Exit),
        };

        self.announce(parameter)?;
        let result = run_key_exchange(self.provider, parameter);
        self.finish_run(result)
    }

    fn signature_submenu(&mut self) -> Result<MenuState> {
        let parameter = match self.select_parameter(Family::Signature)? {
            Selection::Chosen(parameter) => parameter,
            Selection::Retry => return Ok(MenuState::SignatureSubmenu),
            Selection::EndOfInput => return Ok(MenuState::Exit),
        };

        self.sign_and_verify(parameter)
    }

    fn slh_dsa(&mut self) -> Result<MenuState> {
        self.sign_and_verify(catalog::fixed_slh_dsa())
    }

    fn sign_and_verify(&mut self, parameter: AlgorithmParameter) -> Result<MenuState> {
        self.announce(parameter)?;
        render::prompt(&mut self.output, render::MESSAGE_PROMPT)?;

        let bytes = match self.read_line()? {
            Some(bytes) => bytes,
            None => return Ok(MenuState::Exit),
        };

        let result = String::from_utf8(bytes)
            .map_err(|e| HarnessError::Encoding(e.to_string()))
            .and_then(|message| {
                run_signature(
                    self.provider,
                    parameter,
                    message.as_bytes(),
                    self.settings.signature_timing,
                )
            });

        self.finish_run(result)
    }

    fn select_parameter(&mut self, family: Family) -> Result<Selection> {
        render::submenu(&mut self.output, family)?;
        let line = match self.read_choice()? {
            Some(line) => line,
            None => return Ok(Selection::EndOfInput),
        };

        let resolved = catalog::parse_selection("parameter menu", &line)
            .and_then(|index| catalog::resolve(family, index));

        match resolved {
            Ok(parameter) => Ok(Selection::Chosen(parameter)),
            Err(e) if e.is_selection_error() => {
                self.report_invalid(&e)?;
                Ok(Selection::Retry)
            }
            Err(e) => Err(e),
        }
    }

    fn announce(&mut self, parameter: AlgorithmParameter) -> Result<()> {
        writeln!(self.output, "Using {}...", parameter)?;
        Ok(())
    }

    /// Render a finished run; workflow failures become one reported line
    fn finish_run(&mut self, result: Result<RunReport>) -> Result<MenuState> {
        match result {
            Ok(report) => render::report(&mut self.output, &report, &self.settings)?,
            Err(e) if e.is_workflow_failure() => {
                debug!("Workflow failed: {}", e);
                writeln!(self.output, "Error: {}", e)?;
                writeln!(self.output)?;
            }
            Err(e) => return Err(e),
        }

        Ok(MenuState::MainMenu)
    }

    fn report_invalid(&mut self, e: &HarnessError) -> Result<()> {
        debug!("{}", e);
        writeln!(self.output, "{}", render::INVALID_CHOICE)?;
        Ok(())
    }

    fn read_choice(&mut self) -> Result<Option<String>> {
        render::prompt(&mut self.output, render::CHOICE_PROMPT)?;
        Ok(self
            .read_line()?
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned()))
    }

    /// Next input line without its terminator, `None` at end of input
    fn read_line(&mut self) -> Result<Option<Vec<u8>>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            debug!("End of input");
            return Ok(None);
        }

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }

        Ok(Some(buf))
    }
}

enum Selection {
    Chosen(AlgorithmParameter),
    Retry,
    EndOfInput,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pqc_primitives::PqcryptoProvider;
    use std::io::Cursor;

    fn run_script(script: &[u8]) -> String {
        let provider = PqcryptoProvider::new();
        let mut dispatcher = Dispatcher::new(
            &provider,
            Cursor::new(script.to_vec()),
            Vec::new(),
            HarnessSettings::default(),
        );
        dispatcher.run().unwrap();
        String::from_utf8(dispatcher.into_output()).unwrap()
    }

    #[test]
    fn test_exit_immediately() {
        let output = run_script(b"4\n");
        assert!(output.contains("1. ML-KEM"));
        assert!(output.ends_with("Exiting the program...\n"));
    }

    #[test]
    fn test_end_of_input_exits() {
        let output = run_script(b"");
        assert!(output.contains("Exiting the program..."));

        let output = run_script(b"1\n");
        assert!(output.contains("Exiting the program..."));
    }

    #[test]
    fn test_step_transitions() {
        let provider = PqcryptoProvider::new();
        let mut dispatcher = Dispatcher::new(
            &provider,
            Cursor::new(b"1\n2\n3\n4\n".to_vec()),
            Vec::new(),
            HarnessSettings::default(),
        );

        assert_eq!(dispatcher.step(MenuState::MainMenu).unwrap(), MenuState::KemSubmenu);
        assert_eq!(
            dispatcher.step(MenuState::MainMenu).unwrap(),
            MenuState::SignatureSubmenu
        );
        assert_eq!(dispatcher.step(MenuState::MainMenu).unwrap(), MenuState::SlhDsa);
        assert_eq!(dispatcher.step(MenuState::MainMenu).unwrap(), MenuState::Exit);
        assert_eq!(dispatcher.step(MenuState::Exit).unwrap(), MenuState::Exit);
    }

    #[test]
    fn test_invalid_sub_selection_stays_in_submenu() {
        let provider = PqcryptoProvider::new();
        let mut dispatcher = Dispatcher::new(
            &provider,
            Cursor::new(b"7\n".to_vec()),
            Vec::new(),
            HarnessSettings::default(),
        );

        assert_eq!(
            dispatcher.step(MenuState::KemSubmenu).unwrap(),
            MenuState::KemSubmenu
        );
        let output = String::from_utf8(dispatcher.into_output()).unwrap();
        assert!(output.contains("Invalid choice. Please try again."));
        assert!(!output.contains("Using"));
    }

    #[test]
    fn test_crlf_and_whitespace_are_tolerated() {
        let output = run_script(b" 1 \r\n2\r\n4\r\n");
        assert!(output.contains("Using ML-KEM-768..."));
        assert!(output.contains("shared secret match: true"));
    }

    #[test]
    fn test_invalid_utf8_message_is_reported() {
        let output = run_script(b"3\n\xff\xfe\n4\n");
        assert!(output.contains("Error: Message encoding failed"));
        assert!(output.contains("Exiting the program..."));
    }
}
