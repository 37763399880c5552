fn main() -> Result<(), Box<dyn std::error::Error>> {
    tablecraft::build!("schema/tablecraft.toml");

    Ok(())
}
