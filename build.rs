use std::process::Command;

fn git(args: &[&str]) -> Option<String> {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn main() {
    // Re-run if git HEAD changes
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");

    let hash = git(&["rev-parse", "--short", "HEAD"]);
    let commit_date = git(&["log", "-1", "--format=%cd", "--date=format:%Y-%m-%d %H:%M"]);

    let is_dirty = git(&["status", "--porcelain"]).is_some();

    // Shown after the version in `blogz --version`, e.g. " (1a2b3c4 2024-05-01 10:00)"
    let build_info = match (hash, commit_date) {
        (Some(hash), Some(date)) => {
            let dirty = if is_dirty { "-dirty" } else { "" };
            format!(" ({}{} {})", hash, dirty, date)
        }
        _ => String::new(),
    };

    println!("cargo:rustc-env=BLOGZ_BUILD_INFO={}", build_info);
}
