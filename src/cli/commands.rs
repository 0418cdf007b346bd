//! Shell command definitions and parsing
//!
//! One line of input is one command: a case-insensitive verb followed by
//! whitespace-separated arguments.

use crate::error::{PhonebookError, PhonebookResult};

/// Description of a shell command, used for help and usage errors
#[derive(Debug, Clone)]
pub struct CommandSpec {
    /// Command verb (what user types)
    pub name: &'static str,
    /// Argument shape shown in help and usage errors
    pub usage: &'static str,
    /// Short description
    pub description: &'static str,
}

/// All available shell commands
pub static COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "hello",
        usage: "hello",
        description: "привітання",
    },
    CommandSpec {
        name: "add",
        usage: "add [ім'я] [новий номер телефону]",
        description: "додати контакт або ще один номер",
    },
    CommandSpec {
        name: "change",
        usage: "change [ім'я] [старий номер телефону] [новий номер телефону]",
        description: "замінити номер телефону",
    },
    CommandSpec {
        name: "phone",
        usage: "phone [ім'я]",
        description: "показати контакт",
    },
    CommandSpec {
        name: "all",
        usage: "all",
        description: "показати всі контакти",
    },
    CommandSpec {
        name: "add-birthday",
        usage: "add-birthday [ім'я] [дата DD.MM.YYYY]",
        description: "додати день народження",
    },
    CommandSpec {
        name: "show-birthday",
        usage: "show-birthday [ім'я]",
        description: "показати день народження",
    },
    CommandSpec {
        name: "birthdays",
        usage: "birthdays [кількість днів]",
        description: "найближчі дні народження",
    },
    CommandSpec {
        name: "remove-phone",
        usage: "remove-phone [ім'я] [номер телефону]",
        description: "видалити номер телефону",
    },
    CommandSpec {
        name: "delete",
        usage: "delete [ім'я]",
        description: "видалити контакт",
    },
    CommandSpec {
        name: "help",
        usage: "help",
        description: "список команд",
    },
    CommandSpec {
        name: "close",
        usage: "close або exit",
        description: "зберегти та вийти",
    },
];

/// Look up a command spec by verb
pub fn find_spec(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|c| c.name == name)
}

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phone: String },
    Change { name: String, old_phone: String, new_phone: String },
    Phone { name: String },
    All,
    AddBirthday { name: String, date: String },
    ShowBirthday { name: String },
    Birthdays { window: Option<u32> },
    RemovePhone { name: String, phone: String },
    Delete { name: String },
    Help,
    Exit,
}

/// Parse one line of input
///
/// Returns `Ok(None)` for a blank line. `add` and `add-birthday` ignore
/// extra trailing arguments; the other commands require an exact count.
pub fn parse_input(line: &str) -> PhonebookResult<Option<Command>> {
    let mut tokens = line.split_whitespace();
    let Some(verb) = tokens.next() else {
        return Ok(None);
    };
    let verb = verb.to_lowercase();
    let args: Vec<String> = tokens.map(str::to_string).collect();

    let command = match verb.as_str() {
        "hello" => Command::Hello,
        "all" => Command::All,
        "help" => Command::Help,
        "close" | "exit" => Command::Exit,
        "add" => {
            let [name, phone] = at_least::<2>("add", args)?;
            Command::Add { name, phone }
        }
        "change" => {
            let [name, old_phone, new_phone] = exactly::<3>("change", args)?;
            Command::Change {
                name,
                old_phone,
                new_phone,
            }
        }
        "phone" => {
            let [name] = exactly::<1>("phone", args)?;
            Command::Phone { name }
        }
        "add-birthday" => {
            let [name, date] = at_least::<2>("add-birthday", args)?;
            Command::AddBirthday { name, date }
        }
        "show-birthday" => {
            let [name] = exactly::<1>("show-birthday", args)?;
            Command::ShowBirthday { name }
        }
        "birthdays" => {
            let window = match args.as_slice() {
                [] => None,
                [days] => Some(days.parse::<u32>().map_err(|_| usage_error("birthdays"))?),
                _ => return Err(usage_error("birthdays")),
            };
            Command::Birthdays { window }
        }
        "remove-phone" => {
            let [name, phone] = exactly::<2>("remove-phone", args)?;
            Command::RemovePhone { name, phone }
        }
        "delete" => {
            let [name] = exactly::<1>("delete", args)?;
            Command::Delete { name }
        }
        _ => return Err(PhonebookError::InvalidCommand(verb)),
    };

    Ok(Some(command))
}

fn usage_error(name: &'static str) -> PhonebookError {
    let usage = find_spec(name).map(|spec| spec.usage).unwrap_or(name);
    PhonebookError::usage(name, usage)
}

fn exactly<const N: usize>(name: &'static str, args: Vec<String>) -> PhonebookResult<[String; N]> {
    args.try_into().map_err(|_| usage_error(name))
}

fn at_least<const N: usize>(
    name: &'static str,
    mut args: Vec<String>,
) -> PhonebookResult<[String; N]> {
    if args.len() < N {
        return Err(usage_error(name));
    }
    args.truncate(N);
    exactly::<N>(name, args)
}
