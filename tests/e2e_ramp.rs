mod support;

use std::fs;

use tempfile::tempdir;

use support::{reserve_unused_origin, run_load_tester, spawn_http_server};

#[test]
fn e2e_ramp_completes_against_local_server() -> Result<(), String> {
    let (host, _server) = spawn_http_server()?;

    let output = run_load_tester([
        "--host",
        host.as_str(),
        "--paths",
        "/",
        "-c",
        "4",
        "--stage-delay",
        "200ms",
    ])?;
    if !output.status.success() {
        return Err(format!(
            "stdout: {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        ));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    if !stdout.contains("Count Success: ") {
        return Err(format!("Expected a summary block, got:\n{}", stdout));
    }
    if !stdout.contains("Details:") {
        return Err(format!("Expected a details table, got:\n{}", stdout));
    }
    let expected_url = format!("{}/", host);
    if !stdout.contains(&expected_url) {
        return Err(format!("Expected a row for {}, got:\n{}", expected_url, stdout));
    }
    Ok(())
}

#[test]
fn e2e_paths_file_rows_appear_in_the_table() -> Result<(), String> {
    let (host, _server) = spawn_http_server()?;
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let paths_file = dir.path().join("paths.txt");
    fs::write(&paths_file, "/alpha\n/beta\n").map_err(|err| format!("write failed: {}", err))?;
    let paths_file_arg = paths_file.to_string_lossy().into_owned();

    let output = run_load_tester([
        "--host",
        host.as_str(),
        "--paths-file",
        paths_file_arg.as_str(),
        "-c",
        "2",
        "--stage-delay",
        "200ms",
    ])?;
    if !output.status.success() {
        return Err(format!(
            "stdout: {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        ));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    for path in ["/alpha", "/beta"] {
        let expected_url = format!("{}{}", host, path);
        if !stdout.contains(&expected_url) {
            return Err(format!("Expected a row for {}, got:\n{}", expected_url, stdout));
        }
    }
    Ok(())
}

#[test]
fn e2e_rejects_out_of_range_threshold() -> Result<(), String> {
    let output = run_load_tester([
        "--host",
        "http://localhost:8080",
        "--paths",
        "/",
        "--err-threshold",
        "2.0",
    ])?;
    if output.status.success() {
        return Err("Expected an out-of-range threshold to fail".to_owned());
    }
    Ok(())
}

#[test]
fn e2e_rejects_an_empty_url_list() -> Result<(), String> {
    let output = run_load_tester(["--host", "http://localhost:8080", "--stage-delay", "100ms"])?;
    if output.status.success() {
        return Err("Expected an empty URL list to fail".to_owned());
    }
    Ok(())
}

#[test]
fn e2e_fails_when_the_baseline_probe_cannot_connect() -> Result<(), String> {
    let host = reserve_unused_origin()?;
    let output = run_load_tester([
        "--host",
        host.as_str(),
        "--paths",
        "/",
        "--stage-delay",
        "100ms",
    ])?;
    if output.status.success() {
        return Err("Expected init against a closed port to fail".to_owned());
    }
    Ok(())
}
