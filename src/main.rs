fn main() -> anyhow::Result<()> {
    court_ngin::court::run()
}
