use std::io::Write;

use log::{debug, warn};

use crate::command::Command;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::list::List;

const MENU: [&str; 5] = ["1.push", "2.pop", "3.peek", "4.size", "5.clear"];
const EMPTY_MESSAGE: &str = "no data";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// One interactive session: a list plus the writer its messages go to.
pub struct Console<W: Write> {
    list: List<i32>,
    config: Config,
    out: W,
}

impl<W: Write> Console<W> {
    pub fn new(config: Config, out: W) -> Self {
        Self::with_list(config, List::new(), out)
    }

    pub fn with_list(config: Config, list: List<i32>, out: W) -> Self {
        Console { list, config, out }
    }

    pub fn list(&self) -> &List<i32> {
        &self.list
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn menu(&mut self) -> Result<()> {
        writeln!(self.out)?;
        for item in MENU {
            writeln!(self.out, "{}", item)?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    pub fn execute(&mut self, command: Command) -> Result<Flow> {
        debug!("execute {:?} (size {})", command, self.list.size());

        match command {
            Command::Push(value) => {
                self.list.push(value);
                self.print_list()?;
            }
            Command::Pop => {
                match self.list.pop() {
                    Ok(value) => debug!("popped {}", value),
                    Err(Error::EmptyCollection) => {
                        warn!("pop on an empty list");
                        writeln!(self.out, "{}", EMPTY_MESSAGE)?;
                    }
                    Err(e) => return Err(e),
                }
                self.print_list()?;
            }
            Command::Peek => match self.list.peek() {
                Ok(value) => writeln!(self.out, "data: {}", value)?,
                Err(Error::EmptyCollection) => writeln!(self.out, "{}", EMPTY_MESSAGE)?,
                Err(e) => return Err(e),
            },
            Command::Size => writeln!(self.out, "size: {}", self.list.size())?,
            Command::Clear => {
                writeln!(self.out, "clearing all data")?;
                let removed = self.list.clear();
                debug!("cleared {} values", removed);
            }
            Command::Print => self.print_list()?,
            Command::Help => self.menu()?,
            Command::Exit => return Ok(Flow::Exit),
        }

        Ok(Flow::Continue)
    }

    /// Writes a user-facing error line; the session keeps going.
    pub fn report(&mut self, err: &Error) -> Result<()> {
        warn!("{}", err);
        writeln!(self.out, "error: {}", err)?;
        Ok(())
    }

    fn print_list(&mut self) -> Result<()> {
        let line = self.list.render(&self.config.separator);
        writeln!(self.out, "{}", line)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console() -> Console<Vec<u8>> {
        Console::new(Config::default(), Vec::new())
    }

    fn output(console: Console<Vec<u8>>) -> String {
        String::from_utf8(console.into_inner()).unwrap()
    }

    #[test]
    fn push_and_pop_print_the_list() {
        let mut console = console();
        for value in [1, 2, 3] {
            assert_eq!(console.execute(Command::Push(value)), Ok(Flow::Continue));
        }
        console.execute(Command::Pop).unwrap();

        assert_eq!(output(console), "1\n1 -> 2\n1 -> 2 -> 3\n1 -> 2\n");
    }

    #[test]
    fn peek_and_size() {
        let mut console = console();
        console.execute(Command::Peek).unwrap();
        console.execute(Command::Size).unwrap();
        console.execute(Command::Push(8)).unwrap();
        console.execute(Command::Peek).unwrap();
        console.execute(Command::Size).unwrap();

        assert_eq!(output(console), "no data\nsize: 0\n8\ndata: 8\nsize: 1\n");
    }

    #[test]
    fn pop_on_empty_keeps_running() {
        let mut console = console();
        assert_eq!(console.execute(Command::Pop), Ok(Flow::Continue));
        assert!(console.list().is_empty());
        assert_eq!(output(console), "no data\n\n");
    }

    #[test]
    fn clear_and_exit() {
        let list = (1..=4).collect();
        let mut console = Console::with_list(Config::default(), list, Vec::new());
        console.execute(Command::Clear).unwrap();
        assert!(console.list().is_empty());
        assert_eq!(console.execute(Command::Exit), Ok(Flow::Exit));
        assert_eq!(output(console), "clearing all data\n");
    }

    #[test]
    fn menu_and_custom_separator() {
        let config = Config {
            separator: ", ".to_string(),
            ..Config::default()
        };
        let mut console = Console::with_list(config, (5..=7).collect(), Vec::new());
        console.execute(Command::Help).unwrap();
        console.execute(Command::Print).unwrap();
        console.report(&Error::Parse("bad".to_string())).unwrap();

        assert_eq!(
            output(console),
            "\n1.push\n2.pop\n3.peek\n4.size\n5.clear\n\n5, 6, 7\nerror: bad\n"
        );
    }
}
