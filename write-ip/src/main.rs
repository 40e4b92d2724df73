use write_ip::run_cli;

fn main() -> anyhow::Result<()> {
    run_cli()
}
