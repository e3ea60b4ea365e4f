use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    crdsplit completions bash > ~/.bash_completion.d/crdsplit\n\n\
                  Generate zsh completions:\n    crdsplit completions zsh > ~/.zfunc/_crdsplit")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
