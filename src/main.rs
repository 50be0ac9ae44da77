use std::error::Error;

use qrinlay::QRBuilder;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let data = "https://developer.mozilla.org/en-US/";

    let qr = QRBuilder::new(data).size(370).padding(8).build()?;
    println!("{}", qr.to_str(1));

    Ok(())
}
