use tanksnip_core::error::TankSnipError;
use tanksnip_core::model::TankReport;

pub fn print(report: &TankReport) -> Result<(), TankSnipError> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{json}");
    Ok(())
}
