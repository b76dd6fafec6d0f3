use std::io::{self, Stdout};

use log::info;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use linked_stack::{Choice, Command, Config, Console, Flow};

const VALUE_PROMPT: &str = "value: ";

// push 的值单独读取，读到合法整数为止；Ctrl-C / Ctrl-D 取消这次 push
fn read_value(
    editor: &mut DefaultEditor,
    console: &mut Console<Stdout>,
) -> anyhow::Result<Option<i32>> {
    loop {
        match editor.readline(VALUE_PROMPT) {
            Ok(line) => match Command::parse_value(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => console.report(&e)?,
            },
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(None),
            Err(err) => return Err(err.into()),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::from_env()?;
    info!("starting with {:?}", config);

    let prompt = config.prompt.clone();
    let history = config.history;
    let mut console = Console::new(config, io::stdout());
    let mut editor = DefaultEditor::new()?;

    loop {
        console.menu()?;

        let line = match editor.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => return Err(err.into()),
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if history {
            editor.add_history_entry(line)?;
        }

        let command = match Command::parse_choice(line) {
            Ok(Choice::Ready(command)) => command,
            Ok(Choice::NeedValue) => match read_value(&mut editor, &mut console)? {
                Some(value) => Command::Push(value),
                None => continue,
            },
            Err(e) => {
                console.report(&e)?;
                continue;
            }
        };

        if console.execute(command)? == Flow::Exit {
            break;
        }
    }

    info!("exit with {} values left", console.list().size());
    Ok(())
}
