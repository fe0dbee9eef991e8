use waku_payload::version_1::{generate_private_key, generate_symmetric_key, public_key};

#[derive(Debug, Clone, clap::Args)]
pub struct KeysGenerateCmd {}

pub fn run_cmd(_args: KeysGenerateCmd) -> anyhow::Result<()> {
    let symmetric_key = generate_symmetric_key();
    let private_key = generate_private_key();
    let public_key = public_key(&private_key)?;

    println!("symmetric key: {}", hex::encode(symmetric_key));
    println!("private key:   {}", hex::encode(private_key));
    println!("public key:    {}", hex::encode(public_key));

    Ok(())
}
