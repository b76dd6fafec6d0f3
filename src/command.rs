use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Push(i32),
    Pop,
    Peek,
    Size,
    Clear,
    Print,
    Help,
    Exit,
}

/// Result of reading a menu choice. Choosing push without a value means the
/// caller still has to ask for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Ready(Command),
    NeedValue,
}

impl Command {
    pub fn parse_choice(input: &str) -> Result<Choice> {
        let mut parts = input.split_whitespace();
        let word = match parts.next() {
            Some(word) => word.to_ascii_lowercase(),
            None => return Err(Error::Parse("empty choice".to_string())),
        };
        let arg = parts.next();

        if let Some(extra) = parts.next() {
            return Err(Error::Parse(format!("unexpected argument '{}'", extra)));
        }

        let command = match word.as_str() {
            "1" | "push" => {
                return match arg {
                    Some(value) => Ok(Choice::Ready(Command::Push(Self::parse_value(value)?))),
                    None => Ok(Choice::NeedValue),
                };
            }
            "2" | "pop" => Command::Pop,
            "3" | "peek" => Command::Peek,
            "4" | "size" => Command::Size,
            "5" | "clear" => Command::Clear,
            "print" => Command::Print,
            "help" => Command::Help,
            "exit" | "quit" => Command::Exit,
            other => {
                return Err(Error::Parse(format!(
                    "unknown choice '{}', expected 1-5",
                    other
                )));
            }
        };

        // 只有 push 带参数
        match arg {
            Some(arg) => Err(Error::Parse(format!("unexpected argument '{}'", arg))),
            None => Ok(Choice::Ready(command)),
        }
    }

    pub fn parse_value(input: &str) -> Result<i32> {
        let value = input.trim().parse::<i32>()?;
        Ok(value)
    }
}
