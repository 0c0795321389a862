use std::error::Error;

use lexopt::{Arg, Parser, ValueExt};

use taskcal::action::{ActionOutcome, TaskAction};
use taskcal::calendar::{CalendarGridBuilder, YearMonth};
use taskcal::client::Client;
use taskcal::clock::{Clock, SystemClock};
use taskcal::task::{Priority, TaskId};
use taskcal::view::CalendarView;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Command {
    Show { month: Option<YearMonth> },
    Act { action: TaskAction, server: Option<String> },
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut server = None;
        let mut month = None;
        let mut action = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('s') | Arg::Long("server") => server = Some(parser.value()?.string()?),
                Arg::Value(value) if month.is_none() && action.is_none() => {
                    let value = value.string()?;
                    let id = |parser: &mut Parser| -> Result<TaskId, lexopt::Error> { parser.value()?.parse() };
                    action = match value.as_str() {
                        "toggle" => Some(TaskAction::Toggle(id(&mut parser)?)),
                        "move-tomorrow" => Some(TaskAction::MoveTomorrow(id(&mut parser)?)),
                        "delete" => Some(TaskAction::DeleteCompletely(id(&mut parser)?)),
                        "priority" => {
                            let task = id(&mut parser)?;
                            let priority: Priority = parser.value()?.parse()?;
                            Some(TaskAction::UpdatePriority(task, priority))
                        },
                        _ => {
                            month = Some(parse_month(&value).map_err(|error| lexopt::Error::ParsingFailed {
                                value: value.clone(),
                                error: error.into(),
                            })?);
                            None
                        },
                    };
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(match action {
            Some(action) => Command::Act { action, server },
            None => Command::Show { month },
        })
    }

    async fn run(self) -> Result<(), Box<dyn Error>> {
        match self {
            Command::Show { month } => {
                let today = SystemClock.today();
                let view = match month {
                    Some(month) => CalendarView::new(month),
                    None => CalendarView::current(&SystemClock),
                };
                let grid = view.grid(&CalendarGridBuilder::new(), today)?;
                taskcal::utils::print_grid(&grid);
                Ok(())
            }
            Command::Act { action, server } => {
                let client = match server {
                    Some(url) => Client::new(url)?,
                    None => Client::from_config()?,
                };
                log::debug!("Using server {}", client.base_url());
                match action.perform(&client).await? {
                    ActionOutcome::Toggled { completed: true } => println!("Task {} is completed", action.task_id()),
                    ActionOutcome::Toggled { completed: false } => println!("Task {} is not completed", action.task_id()),
                    ActionOutcome::PriorityUpdated => println!("Priority of task {} updated", action.task_id()),
                    ActionOutcome::Moved => println!("Task {} moved to tomorrow", action.task_id()),
                    ActionOutcome::Deleted => println!("Task {} deleted", action.task_id()),
                }
                Ok(())
            }
            Command::Help => {
                println!("Usage: taskcal [options] [YYYY-MM]");
                println!("       taskcal [options] toggle|move-tomorrow|delete <ID>");
                println!("       taskcal [options] priority <ID> <1|2|3>");
                println!();
                println!("Display a month calendar, or act on a task of the server");
                println!();
                println!("Options:");
                println!("  -s, --server <URL>  Server to send task actions to (default: ${})", taskcal::config::SERVER_URL_ENV);
                println!("  -h, --help          Display this help message and exit");
                println!("  -V, --version       Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Parse a `YYYY-MM` month (1-based on the command line)
fn parse_month(s: &str) -> Result<YearMonth, String> {
    let (year, month) = s.split_once('-').ok_or_else(|| format!("Expected YYYY-MM, got {:?}", s))?;
    let year: i32 = year.parse().map_err(|_| format!("Invalid year {:?}", year))?;
    let month: u32 = month.parse().map_err(|_| format!("Invalid month {:?}", month))?;
    let month0 = month.checked_sub(1).ok_or_else(|| format!("Invalid month {}", month))?;
    YearMonth::new(year, month0).map_err(|err| err.to_string())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    Command::from_parser(Parser::from_env())?.run().await
}
