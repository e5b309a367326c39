use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::infrastructure::TerminalPrompter;
use crate::models::{event_day_for, Part, PuzzleKey, VerdictStatus};
use crate::orchestrator::{App, ConfigureOutcome};
use crate::services::InputWrite;
use crate::utils::logging::{log_command_complete, log_command_start};
use crate::workflow::FlowOutcome;

#[derive(Parser)]
#[command(name = "aoc_helper")]
#[command(about = "Fetch puzzle input, run local solutions and submit answers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root containing `{year}/day{day}` folders
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Store the session cookie
    Configure {
        /// Session cookie value (prompted for when omitted)
        token: Option<String>,
        /// Overwrite an existing cookie without asking
        #[arg(long)]
        force: bool,
    },
    /// Download the puzzle input into `input.txt`
    Fetch(DayArgs),
    /// Run the local solution and print its output
    Run(SolutionArgs),
    /// Run the local solution and submit its output
    Submit(SolutionArgs),
}

#[derive(Args, Debug, Clone)]
pub struct DayArgs {
    /// Event year (defaults to today during December)
    #[arg(short, long)]
    pub year: Option<u16>,
    /// Puzzle day (defaults to today during December)
    #[arg(short, long)]
    pub day: Option<u8>,
}

#[derive(Args, Debug, Clone)]
pub struct SolutionArgs {
    #[command(flatten)]
    pub date: DayArgs,
    /// Which part to run when both part files exist
    #[arg(short, long, value_parser = parse_part)]
    pub part: Option<Part>,
}

impl DayArgs {
    /// 缺省的年份/日期取活动期间的当天
    pub fn resolve(&self) -> AppResult<(u16, u8)> {
        let today = event_day_for(chrono::Local::now().date_naive());
        let year = self.year.or(today.map(|(y, _)| y));
        let day = self.day.or(today.map(|(_, d)| d));

        match (year, day) {
            (Some(year), Some(day)) => Ok((year, day)),
            _ => Err(AppError::invalid_puzzle("请通过 --year 和 --day 指定题目")),
        }
    }

    pub fn key(&self, part: Option<Part>) -> AppResult<PuzzleKey> {
        let (year, day) = self.resolve()?;
        PuzzleKey::new(year, day, part)
    }
}

fn parse_part(value: &str) -> Result<Part, String> {
    value
        .parse::<u8>()
        .ok()
        .and_then(Part::from_level)
        .ok_or_else(|| format!("part must be 1 or 2, got {value:?}"))
}

pub async fn run(command: Commands, config: Config) -> AppResult<()> {
    let app = App::new(config);
    let prompter = TerminalPrompter::new();

    match command {
        Commands::Configure { token, force } => {
            let token = token
                .or_else(|| prompter.ask("请输入 session cookie: "))
                .unwrap_or_default();

            match app.configure(&token, force, &prompter).await? {
                ConfigureOutcome::Saved => println!("配置已保存"),
                ConfigureOutcome::Cancelled => println!("配置已取消"),
            }
        }
        Commands::Fetch(args) => {
            let (year, day) = args.resolve()?;
            log_command_start("获取输入", &format!("{} 第 {} 天", year, day));

            match app.fetch_input(year, day).await? {
                InputWrite::Written(path) => println!("输入已保存到 {}", path.display()),
                InputWrite::AlreadyExists(path) => println!("输入已存在: {}", path.display()),
            }
            log_command_complete("获取输入");
        }
        Commands::Run(args) => {
            let key = args.date.key(args.part)?;
            log_command_start("运行解决方案", &key.to_string());

            match app.run_solution(key, &prompter).await? {
                FlowOutcome::Done(output) => println!("输出: {}", output),
                FlowOutcome::Cancelled => println!("已取消"),
            }
            log_command_complete("运行解决方案");
        }
        Commands::Submit(args) => {
            let key = args.date.key(args.part)?;
            log_command_start("提交答案", &key.to_string());

            match app.submit_answer(key, &prompter).await? {
                FlowOutcome::Done(submission) => {
                    let label = match submission.verdict.status {
                        VerdictStatus::Success => "✅ 答案正确",
                        VerdictStatus::Wrong => "❌ 答案错误",
                        VerdictStatus::Unknown => "❔ 无法识别的响应",
                    };
                    println!("{} ({})", label, submission.verdict.status);
                    if let Some(message) = submission.verdict.message() {
                        println!("{}", message);
                    }
                    println!("题目页面: {}", submission.puzzle_url);
                }
                FlowOutcome::Cancelled => println!("已取消"),
            }
            log_command_complete("提交答案");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_submit_args() {
        let cli = Cli::try_parse_from(["aoc_helper", "submit", "--year", "2023", "--day", "7", "--part", "2"]).unwrap();
        match cli.command {
            Commands::Submit(args) => {
                assert_eq!(args.date.year, Some(2023));
                assert_eq!(args.date.day, Some(7));
                assert_eq!(args.part, Some(Part::Two));
                assert_eq!(args.date.resolve().unwrap(), (2023, 7));
            }
            _ => panic!("expected submit"),
        }
    }

    #[test]
    fn test_rejects_bad_part() {
        assert!(Cli::try_parse_from(["aoc_helper", "run", "-y", "2023", "-d", "1", "-p", "3"]).is_err());
    }

    #[test]
    fn test_global_root_flag() {
        let cli = Cli::try_parse_from(["aoc_helper", "fetch", "-y", "2020", "-d", "2", "--root", "/tmp/aoc"]).unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("/tmp/aoc")));
        assert!(matches!(cli.command, Commands::Fetch(_)));
    }
}
