use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

/// This test runs `unity-summary` over a directory holding one passing
/// result file. It asserts that the command executes successfully (exit
/// code 0) and that the overall summary line reports the right totals.
///
/// 这个测试在包含一个通过结果文件的目录上运行 `unity-summary`。
/// 它断言命令成功执行（退出码为 0），并且总体摘要行报告了正确的总数。
#[test]
fn test_successful_run() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("ping.testpass"),
        "src/test_ping.c:12:test_ping_replies:PASS\n\
         src/test_ping.c:19:test_ping_drops:PASS\n\
         2 Tests 0 Failures 0 Ignored\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("unity-summary").unwrap();
    cmd.arg(format!("{}/", dir.path().display()))
        .arg("")
        .arg("--lang")
        .arg("en");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OVERALL UNITY TEST SUMMARY"))
        .stdout(predicate::str::contains(
            "2 TOTAL TESTS 0 TOTAL FAILURES 0 IGNORED",
        ));
}

/// Failing tests appear in the FAILED section, but the tool itself still
/// exits 0: it summarizes a run, it does not judge it.
///
/// 失败的测试出现在 FAILED 部分，但工具本身仍以 0 退出：
/// 它只是汇总一次运行，而不是评判它。
#[test]
fn test_failures_are_reported_with_exit_zero() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("timer.testfail"),
        "src/test_timer.c:8:test_timer_fires:FAIL:Expected 1 Was 0\n\
         1 Tests 1 Failures 0 Ignored\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("unity-summary").unwrap();
    cmd.arg(format!("{}/", dir.path().display()))
        .arg("")
        .arg("--lang")
        .arg("en");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("UNITY FAILED TEST SUMMARY"))
        .stdout(predicate::str::contains(
            "src/test_timer.c:8:test_timer_fires:FAIL:Expected 1 Was 0",
        ));
}

/// The configured root path decorates every displayed detail line.
///
/// 配置的根路径会装饰每一条显示的详细行。
#[test]
fn test_root_path_decorates_detail_lines() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("timer.testfail"),
        "src/test_timer.c:8:test_timer_fires:FAIL\n\
         1 Tests 1 Failures 0 Ignored\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("unity-summary").unwrap();
    cmd.arg(format!("{}/", dir.path().display()))
        .arg("/work/proj/")
        .arg("--lang")
        .arg("en");

    cmd.assert().success().stdout(predicate::str::contains(
        "/work/proj/src/test_timer.c:8:test_timer_fires:FAIL",
    ));
}

/// A directory with no matching result files is an error: the tool prints
/// the ERROR header plus the usage block to stdout and exits 1.
///
/// 没有匹配结果文件的目录是一个错误：工具将 ERROR 标头和用法信息
/// 打印到标准输出并以 1 退出。
#[test]
fn test_no_result_files_prints_usage() {
    let dir = tempdir().unwrap();

    let mut cmd = Command::cargo_bin("unity-summary").unwrap();
    cmd.arg(format!("{}/", dir.path().display()))
        .arg("")
        .arg("--lang")
        .arg("en");

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("ERROR:"))
        .stdout(predicate::str::contains("No *.testpass or *.testfail files"))
        .stdout(predicate::str::contains("Usage: unity-summary"));
}

/// An empty result file aborts the whole run.
///
/// 空的结果文件会中止整个运行。
#[test]
fn test_empty_result_file_aborts() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("hollow.testpass"), "").unwrap();

    let mut cmd = Command::cargo_bin("unity-summary").unwrap();
    cmd.arg(format!("{}/", dir.path().display()))
        .arg("")
        .arg("--lang")
        .arg("en");

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("Empty test result file"));
}
