use clap::Parser;
use colored::*;

#[derive(Parser, Debug)]
#[command(name = "comando")]
#[command(version)]
#[command(about = "Generate bash commands from natural language with AI", long_about = None)]
pub struct Cli {
    /// 자연어 프롬프트
    pub prompt: Vec<String>,

    /// 확인 없이 생성된 명령어를 바로 실행
    #[arg(short = 'y', long)]
    pub force: bool,

    /// AI 제공자 선택 (openai, anthropic, deepseek, gemini). 미지정시 설정 파일의 defaultProvider 사용
    #[arg(short = 'p', long)]
    pub provider: Option<String>,

    /// 대화형 설정 (기본 provider, API key)
    #[arg(short = 'c', long)]
    pub config: bool,

    /// 디버그 로그 출력
    #[arg(short = 'd', long)]
    pub debug: bool,
}

impl Cli {
    pub fn prompt_text(&self) -> String {
        self.prompt.join(" ")
    }

    pub fn has_prompt(&self) -> bool {
        !self.prompt_text().trim().is_empty()
    }
}

/// 프롬프트 없이 실행했을 때 보여주는 사용법
pub fn print_usage() {
    println!("{}", "[!] You must provide a prompt to generate a command.".yellow());
    println!("\nBasic usage:");
    println!("{}", "  comando \"find every file that contains some text\"".green());
    println!("\nOptions:");
    println!("{}Run the generated command without asking for confirmation", "  -y, --force      ".cyan());
    println!("{}Choose the AI provider (openai, anthropic, deepseek, gemini)", "  -p, --provider   ".cyan());
    println!("{}Configure the application settings", "  -c, --config     ".cyan());
    println!("{}Print debug logs", "  -d, --debug      ".cyan());
    println!("{}Show this help", "  -h, --help       ".cyan());
    println!("{}Show the version", "  -V, --version    ".cyan());
    println!("\nExamples:");
    println!("{}", "  comando \"list files sorted by size\"".green());
    println!("{}", "  comando --provider gemini \"find the processes using the most memory\"".green());
    println!("{}", "  comando --force \"create a backup of this directory\"".green());
}
