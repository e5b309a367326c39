use std::path::Path;
use std::sync::{Arc, Mutex};

use aoc_helper::infrastructure::CommandExecutor;
use aoc_helper::logger;
use aoc_helper::services::{InputWrite, ResolvedCommand};
use aoc_helper::{App, AppError, Config, ExecutionResult, FlowOutcome, Part, PuzzleKey, VerdictStatus};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// 不启动进程，直接返回预设输出
struct CannedExecutor {
    stdout: String,
    commands: Arc<Mutex<Vec<String>>>,
}

impl CannedExecutor {
    fn new(stdout: &str) -> Self {
        Self {
            stdout: stdout.to_string(),
            commands: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl CommandExecutor for CannedExecutor {
    async fn execute(&self, command: &ResolvedCommand) -> ExecutionResult {
        self.commands.lock().unwrap().push(command.command_line.clone());
        ExecutionResult::success(&self.stdout)
    }
}

fn config_for(mock_server: &MockServer, root: &Path) -> Config {
    Config::default()
        .with_base_url(mock_server.uri())
        .with_workspace_root(root)
        .with_session_file(root.join("session.toml"))
}

async fn configured_app(mock_server: &MockServer, root: &Path, stdout: &str) -> App<CannedExecutor> {
    let app = App::with_executor(config_for(mock_server, root), CannedExecutor::new(stdout));
    app.configure("abc123", true, &|_: &str| true)
        .await
        .expect("保存 session 失败");
    app
}

fn decline(_: &[Part]) -> Option<Part> {
    None
}

fn write_files(root: &Path, year: u16, day: u8, names: &[&str]) {
    let folder = root.join(year.to_string()).join(format!("day{}", day));
    std::fs::create_dir_all(&folder).unwrap();
    for name in names {
        std::fs::write(folder.join(name), "").unwrap();
    }
}

#[tokio::test]
async fn test_fetch_input_404_writes_nothing() {
    logger::init();

    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/2021/day/3/input"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let app = configured_app(&mock_server, dir.path(), "").await;

    let result = app.fetch_input(2021, 3).await;
    assert!(matches!(result, Err(AppError::InputFetchFailed { status: 404 })));

    let folder = dir.path().join("2021").join("day3");
    assert!(folder.is_dir(), "失败时已创建的目录保留");
    assert!(!folder.join("input.txt").exists());
}

#[tokio::test]
async fn test_fetch_input_writes_body_verbatim() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/2021/day/3/input"))
        .and(header("cookie", "session=abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_string("00100\n11110\n"))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let app = configured_app(&mock_server, dir.path(), "").await;

    let input_path = dir.path().join("2021").join("day3").join("input.txt");
    let result = app.fetch_input(2021, 3).await.unwrap();
    assert_eq!(result, InputWrite::Written(input_path.clone()));
    assert_eq!(std::fs::read_to_string(&input_path).unwrap(), "00100\n11110\n");

    let again = app.fetch_input(2021, 3).await.unwrap();
    assert_eq!(again, InputWrite::AlreadyExists(input_path));
}

#[tokio::test]
async fn test_fetch_input_keeps_raw_bytes() {
    let mock_server = MockServer::start().await;
    let raw = vec![b'#', 0xc3, 0x28, b'.', b'\n'];
    Mock::given(method("GET"))
        .and(path("/2021/day/4/input"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(raw.clone()))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let app = configured_app(&mock_server, dir.path(), "").await;

    app.fetch_input(2021, 4).await.unwrap();
    let written = std::fs::read(dir.path().join("2021").join("day4").join("input.txt")).unwrap();
    assert_eq!(written, raw);
}

#[tokio::test]
async fn test_submit_chosen_part_two() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/2022/day/8/answer"))
        .and(header("cookie", "session=abc123"))
        .and(body_string("level=2&answer=1681"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<main><article><p>That's the right answer! You are <em>one gold star</em> closer.</p></article></main>",
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    write_files(dir.path(), 2022, 8, &["part1.js", "part2.py", "input.txt"]);
    let app = configured_app(&mock_server, dir.path(), "1681\n").await;

    let key = PuzzleKey::new(2022, 8, None).unwrap();
    let outcome = app.submit_answer(key, &|_: &[Part]| Some(Part::Two)).await.unwrap();

    let FlowOutcome::Done(submission) = outcome else {
        panic!("应该完成提交");
    };
    assert_eq!(submission.verdict.status, VerdictStatus::Success);
    assert_eq!(
        submission.verdict.message().as_deref(),
        Some("That's the right answer! You are one gold star closer.")
    );
    assert_eq!(submission.puzzle_url, format!("{}/2022/day/8", mock_server.uri()));
}

#[tokio::test]
async fn test_submit_single_file_defaults_to_level_one() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/2020/day/1/answer"))
        .and(body_string("level=1&answer=514579"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<article><p>That's not the right answer.</p></article>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    write_files(dir.path(), 2020, 1, &["solution.ts"]);
    let app = configured_app(&mock_server, dir.path(), "514579").await;

    let key = PuzzleKey::new(2020, 1, None).unwrap();
    let outcome = app.submit_answer(key, &decline).await.unwrap();

    match outcome {
        FlowOutcome::Done(submission) => assert_eq!(submission.verdict.status, VerdictStatus::Wrong),
        FlowOutcome::Cancelled => panic!("单个文件不需要选择"),
    }
}

#[tokio::test]
async fn test_single_file_ignores_requested_part_two() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/2020/day/2/answer"))
        .and(body_string("level=1&answer=5"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<article><p>That's the right answer!</p></article>"))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/2020/day/2/answer"))
        .and(body_string("level=2&answer=5"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>level two</html>"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    write_files(dir.path(), 2020, 2, &["solution.py"]);
    let app = configured_app(&mock_server, dir.path(), "5\n").await;

    let key = PuzzleKey::new(2020, 2, Some(Part::Two)).unwrap();
    let outcome = app.submit_answer(key, &decline).await.unwrap();

    match outcome {
        FlowOutcome::Done(submission) => assert_eq!(submission.verdict.status, VerdictStatus::Success),
        FlowOutcome::Cancelled => panic!("单个文件不需要选择"),
    }
}

#[tokio::test]
async fn test_submit_unrecognized_response_is_unknown() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/2020/day/2/answer"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>nonsense</html>"))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    write_files(dir.path(), 2020, 2, &["solution.py"]);
    let app = configured_app(&mock_server, dir.path(), "7").await;

    let key = PuzzleKey::new(2020, 2, Some(Part::Two)).unwrap();
    let outcome = app.submit_answer(key, &decline).await.unwrap();

    match outcome {
        FlowOutcome::Done(submission) => {
            assert_eq!(submission.verdict.status, VerdictStatus::Unknown);
            assert_eq!(submission.verdict.raw_body, "<html>nonsense</html>");
        }
        FlowOutcome::Cancelled => panic!("单个文件不需要选择"),
    }
}

#[tokio::test]
async fn test_declined_submission_sends_nothing() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    write_files(dir.path(), 2019, 9, &["part1.js", "part2.py"]);
    let app = configured_app(&mock_server, dir.path(), "1").await;

    let key = PuzzleKey::new(2019, 9, None).unwrap();
    let outcome = app.submit_answer(key, &decline).await.unwrap();
    assert!(matches!(outcome, FlowOutcome::Cancelled));
}

#[tokio::test]
async fn test_run_solution_returns_trimmed_output() {
    let mock_server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    write_files(dir.path(), 2018, 5, &["solution.java", "solution.class"]);
    let executor = CannedExecutor::new("\n  10886 \n");
    let commands = Arc::clone(&executor.commands);
    let app = App::with_executor(config_for(&mock_server, dir.path()), executor);

    let key = PuzzleKey::new(2018, 5, None).unwrap();
    let outcome = app.run_solution(key, &decline).await.unwrap();
    assert_eq!(outcome, FlowOutcome::Done("10886".to_string()));

    // .class 产物被跳过，运行的是源文件
    let commands = commands.lock().unwrap().clone();
    assert_eq!(commands.len(), 1);
    assert!(commands[0].starts_with("javac \"solution.java\""), "{}", commands[0]);
}
