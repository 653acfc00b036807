use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    jobpath completions bash > ~/.bash_completion.d/jobpath\n\n\
                  Generate zsh completions:\n    jobpath completions zsh > ~/.zfunc/_jobpath\n\n\
                  Generate fish completions:\n    jobpath completions fish > ~/.config/fish/completions/jobpath.fish\n\n\
                  Generate PowerShell completions:\n    jobpath completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
