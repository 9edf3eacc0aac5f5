use gerador_config::Config;

/// Strategy for writing the default configuration to `~/gerador/config.json`.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = ();

    fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let path = Config::create_config()?;

        println!("✅ Created config file at: {}", path.display());
        println!();
        println!("🔧 Configuration options:");
        println!("   - storage.data_dir: where the bank store file lives (default ~/gerador)");
        println!("   - banks.initial_count: banks created on first run or reset-all");
        println!("   - banks.min_birth_year / max_birth_year: accepted birth years");
        println!("   - security.confirmation_passphrase: confirms reset and delete");
        println!("   - backup.dir: default directory for export");
        println!();
        Ok(())
    }
}
