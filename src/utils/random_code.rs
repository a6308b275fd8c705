use rand::Rng;

const PASSCODE_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// 生成会话口令
pub fn generate_passcode(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..PASSCODE_CHARSET.len());
            PASSCODE_CHARSET[idx] as char
        })
        .collect()
}
