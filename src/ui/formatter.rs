use colored::*;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static LEADING_COMMAND_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([\w.\-]+)(\s|$)").expect("valid command regex"));

static QUOTED_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""[^"]*"|'[^']*'"#).expect("valid quote regex"));

/// 터미널 출력 포맷터
pub struct Formatter;

impl Formatter {
    /// 생성된 코드를 간단한 구문 강조와 함께 stderr에 출력
    pub fn highlight_code(code: &str) {
        for line in code.lines() {
            if let Some(line) = Self::highlight_line(line) {
                eprintln!("{}", line);
            }
        }
    }

    /// 한 줄 강조. shebang 줄은 출력하지 않는다.
    ///
    /// 맨 앞 명령어는 초록색, 따옴표 문자열은 노란색
    pub fn highlight_line(line: &str) -> Option<String> {
        if line.trim() == "#!/bin/bash" {
            return None;
        }

        let line = QUOTED_REGEX.replace_all(line, |caps: &Captures| caps[0].yellow().to_string());
        let line = LEADING_COMMAND_REGEX.replace(&line, |caps: &Captures| {
            format!("{}{}", caps[1].green(), &caps[2])
        });

        Some(line.into_owned())
    }

    pub fn show_error(message: &str) {
        eprintln!("{}", format!("Error: {}", message).red());
    }

    pub fn show_success(message: &str) {
        eprintln!("{}", message.green());
    }
}
