use tanksnip_core::error::TankSnipError;
use tanksnip_core::specs::{catalog::CATALOG, shell_course_field, DERIVED_FIELDS};

pub fn run() -> Result<(), TankSnipError> {
    println!("Catalog fields:");
    for (label, pattern) in CATALOG {
        println!("  {:<22} {}", label, pattern);
    }
    println!();
    println!("Derived fields:");
    println!("  {}  (one per shell course)", shell_course_field("N"));
    for label in DERIVED_FIELDS {
        println!("  {label}");
    }
    Ok(())
}
