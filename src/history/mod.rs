use chrono::{DateTime, SecondsFormat, Utc};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// 히스토리 항목 (타임스탬프 + 생성된 코드)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub code: String,
}

impl HistoryEntry {
    pub fn now(code: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            code: code.into(),
        }
    }

    /// `<ISO-8601>: <code>\n\n`
    pub fn render(&self) -> String {
        format!(
            "{}: {}\n\n",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.code
        )
    }
}

/// 셸 히스토리 파일을 지원하는 셸
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellKind {
    Bash,
    Zsh,
}

impl ShellKind {
    /// $SHELL 경로의 파일 이름으로 판별
    pub fn detect(shell: &str) -> Option<Self> {
        match Path::new(shell).file_name()?.to_str()? {
            "bash" => Some(ShellKind::Bash),
            "zsh" => Some(ShellKind::Zsh),
            _ => None,
        }
    }

    pub fn history_file_name(&self) -> &'static str {
        match self {
            ShellKind::Bash => ".bash_history",
            ShellKind::Zsh => ".zsh_history",
        }
    }
}

/// 실행한 명령어 히스토리 저장소 (append-only)
///
/// 기록 실패는 경고 로그만 남기고 호출자에게 전파하지 않습니다.
pub struct HistoryStore {
    file_path: PathBuf,
    shell_history: Option<PathBuf>,
}

impl HistoryStore {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            shell_history: None,
        }
    }

    /// 셸 히스토리 파일에도 함께 기록하도록 설정
    ///
    /// 지원하지 않는 셸이거나 홈 디렉토리가 없으면 조용히 건너뛴다.
    pub fn with_shell(mut self, shell: &str, home: Option<&Path>) -> Self {
        self.shell_history = match (ShellKind::detect(shell), home) {
            (Some(kind), Some(home)) => Some(home.join(kind.history_file_name())),
            _ => None,
        };
        self
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn shell_history_path(&self) -> Option<&Path> {
        self.shell_history.as_deref()
    }

    /// 코드를 히스토리 파일과 셸 히스토리에 추가 (best-effort)
    pub fn append(&self, code: &str) {
        let entry = HistoryEntry::now(code);

        if let Err(e) = self.append_entry(&entry) {
            warn!("Failed to write history {}: {}", self.file_path.display(), e);
        }

        if let Some(path) = &self.shell_history {
            if let Err(e) = append_to(path, &format!("{}\n", code)) {
                warn!("Failed to write shell history {}: {}", path.display(), e);
            }
        }
    }

    fn append_entry(&self, entry: &HistoryEntry) -> std::io::Result<()> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        append_to(&self.file_path, &entry.render())?;
        debug!("Recorded history entry in {}", self.file_path.display());
        Ok(())
    }
}

fn append_to(path: &Path, text: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(text.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_entry_render_format() {
        let entry = HistoryEntry {
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
            code: "ls -S".to_string(),
        };
        assert_eq!(entry.render(), "2024-05-01T12:30:00.000Z: ls -S\n\n");
    }

    #[test]
    fn test_detect_shell() {
        assert_eq!(ShellKind::detect("/bin/bash"), Some(ShellKind::Bash));
        assert_eq!(ShellKind::detect("/usr/local/bin/zsh"), Some(ShellKind::Zsh));
        assert_eq!(ShellKind::detect("/usr/bin/fish"), None);
        assert_eq!(ShellKind::detect(""), None);
    }

    #[test]
    fn test_append_creates_directory_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::new(dir.path().join("nested").join("history"));

        store.append("echo one");
        store.append("echo two");

        let content = fs::read_to_string(store.file_path()).unwrap();
        let entries: Vec<&str> = content.split("\n\n").filter(|e| !e.is_empty()).collect();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].ends_with(": echo one"));
        assert!(entries[1].ends_with(": echo two"));
    }

    #[test]
    fn test_shell_history_append() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::new(dir.path().join("history"))
            .with_shell("/bin/zsh", Some(dir.path()));

        store.append("uptime");

        let shell_history = fs::read_to_string(dir.path().join(".zsh_history")).unwrap();
        assert_eq!(shell_history, "uptime\n");
    }

    #[test]
    fn test_unsupported_shell_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::new(dir.path().join("history"))
            .with_shell("/usr/bin/fish", Some(dir.path()));

        assert!(store.shell_history_path().is_none());
        store.append("uptime");
        assert!(dir.path().join("history").exists());
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        // 디렉토리 경로에는 파일로 append 할 수 없다
        let store = HistoryStore::new(dir.path());
        store.append("date");
    }
}
