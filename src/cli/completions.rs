use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    bundle-order completions bash > ~/.bash_completion.d/bundle-order\n\n\
                  Generate zsh completions:\n    bundle-order completions zsh > ~/.zfunc/_bundle-order\n\n\
                  Generate fish completions:\n    bundle-order completions fish > ~/.config/fish/completions/bundle-order.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
