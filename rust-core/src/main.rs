use anyhow::Result;
use log::info;

use fft_tour::demo::{self, DemoConfig};

fn main() -> Result<()> {
    // initialize the logger
    env_logger::init();

    let config = DemoConfig::default();
    info!("Running demos with {:?}", config);

    println!("Hello from main");

    // DFT returning complex numbers
    println!("\nHello from real2complex()");
    println!("\nThis takes in a real number array and returns a complex number array:");
    let complex = demo::real_to_complex(&config)?;
    print!("{}", complex);

    // DFT returning the halfcomplex format, followed by the spectrum
    println!("\nHello from real2real()");
    println!("\nThis takes in a real number array and returns a real number array:");
    let halfcomplex = demo::real_to_real(&config)?;
    println!("{}", halfcomplex);

    Ok(())
}
