#![allow(dead_code)]

use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

pub const ADMIN_USER: &str = "emilys";
pub const ADMIN_PASSWORD: &str = "emilyspass";

pub struct ProcessGuard {
    pub base_url: String,
    _dir: tempfile::TempDir,
    child: Child,
}

impl Drop for ProcessGuard {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

/// Demo upstream plus a dashboard server pointed at it.
pub struct Stack {
    pub api: ProcessGuard,
    pub server: ProcessGuard,
}

impl Stack {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.server.base_url, path)
    }
}

pub fn spawn_stack() -> Result<Stack> {
    spawn_stack_with(false)
}

pub fn spawn_stack_with(fail_categories: bool) -> Result<Stack> {
    let mut api_args = Vec::new();
    if fail_categories {
        api_args.push("--fail-categories".to_string());
    }
    let api = spawn(env!("CARGO_BIN_EXE_dashgate-demo-api"), &api_args)?;

    let server = spawn(
        env!("CARGO_BIN_EXE_dashgate-server"),
        &["--upstream-url".to_string(), api.base_url.clone()],
    )?;
    Ok(Stack { api, server })
}

fn spawn(bin: &str, extra: &[String]) -> Result<ProcessGuard> {
    let dir = tempfile::tempdir().context("create tempdir")?;
    let addr_file = dir.path().join("addr.txt");

    let child = Command::new(bin)
        .args(["--addr", "127.0.0.1:0", "--addr-file"])
        .arg(&addr_file)
        .args(extra)
        .env_remove("DASHGATE_UPSTREAM_URL")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("spawn {}", bin))?;

    let mut guard = ProcessGuard {
        base_url: String::new(),
        _dir: dir,
        child,
    };
    guard.base_url = read_addr_file(&addr_file)?;
    wait_for_healthz(&guard.base_url)?;
    Ok(guard)
}

fn read_addr_file(addr_file: &Path) -> Result<String> {
    let start = Instant::now();
    loop {
        if start.elapsed() > Duration::from_secs(5) {
            anyhow::bail!("addr file not written at {}", addr_file.display());
        }

        if let Ok(s) = std::fs::read_to_string(addr_file) {
            let s = s.trim();
            if s.parse::<std::net::SocketAddr>().is_ok() {
                return Ok(format!("http://{}", s));
            }
        }
        thread::sleep(Duration::from_millis(10));
    }
}

pub fn wait_for_healthz(base_url: &str) -> Result<()> {
    let client = reqwest::blocking::Client::new();
    let start = Instant::now();
    loop {
        if start.elapsed() > Duration::from_secs(5) {
            anyhow::bail!("server did not become healthy at {}/healthz", base_url);
        }
        match client.get(format!("{}/healthz", base_url)).send() {
            Ok(resp) if resp.status().is_success() => return Ok(()),
            _ => {
                thread::sleep(Duration::from_millis(50));
            }
        }
    }
}

/// Client that reports redirects instead of following them.
pub fn client() -> Result<reqwest::blocking::Client> {
    reqwest::blocking::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .context("build client")
}

pub fn location(resp: &reqwest::blocking::Response) -> Option<String> {
    resp.headers()
        .get(reqwest::header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

pub fn set_cookie(resp: &reqwest::blocking::Response) -> Option<String> {
    resp.headers()
        .get(reqwest::header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// Signs in through the login form; returns the `name=value` cookie pair.
pub fn login_cookie(stack: &Stack) -> Result<String> {
    let resp = client()?
        .post(stack.url("/login"))
        .form(&[("username", ADMIN_USER), ("password", ADMIN_PASSWORD)])
        .send()
        .context("POST /login")?;
    anyhow::ensure!(
        resp.status() == reqwest::StatusCode::SEE_OTHER,
        "login status {}",
        resp.status()
    );
    let cookie = set_cookie(&resp).context("login set no cookie")?;
    let pair = cookie.split(';').next().unwrap_or_default().trim().to_string();
    Ok(pair)
}

pub fn cookie_value(pair: &str) -> &str {
    pair.split_once('=').map(|(_, v)| v).unwrap_or_default()
}
