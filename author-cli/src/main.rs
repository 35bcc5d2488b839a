use anyhow::anyhow;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHasher, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use log::info;

use data_author::AuthorProfile;

/// Demonstration consumer of the `data-author` public contract:
/// hashes a throwaway password, constructs one profile from literal
/// values, and prints every accessor plus the JSON form.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let argon2 = Argon2::new(Algorithm::Argon2i, Version::V0x13, Params::default());
    let salt = SaltString::generate(&mut OsRng);
    let hash = argon2
        .hash_password(b"password", &salt)
        .map_err(|err| anyhow!("failed to hash demo password: {err}"))?
        .to_string();
    info!("hashed demo password ({} bytes)", hash.len());

    let author = AuthorProfile::new(
        "cad80653-b18c-42db-869f-b93bf2ffffef",
        Some("12345678901234567890123456789012"),
        Some("www.avatarurl.com"),
        Some("rnunn@dsf.edu"),
        &hash,
        Some("rnunn4"),
    )?;

    println!("id:               {}", author.id());
    println!(
        "activation token: {}",
        author.activation_token().unwrap_or("<absent>")
    );
    println!(
        "avatar url:       {}",
        author.avatar_url().unwrap_or("<absent>")
    );
    println!("email:            {}", author.email());
    println!("password hash:    {}", author.password_hash());
    println!("username:         {}", author.username());

    println!("{}", serde_json::to_string_pretty(&author.to_json())?);
    Ok(())
}
