use smarter_chat::cli::commands::run;

fn main() -> anyhow::Result<()> {
    run()
}
