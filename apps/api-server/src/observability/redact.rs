//! Helpers that keep personal data out of logs.

/// Mask the local part of an e-mail address: `jane@example.com` -> `j***@example.com`.
pub fn mask_email(email: &str) -> String {
    match email.find('@') {
        Some(at_pos) => {
            let (local, domain) = email.split_at(at_pos);
            match local.chars().next() {
                Some(first) if local.chars().count() > 1 => format!("{first}***{domain}"),
                _ => format!("***{domain}"),
            }
        }
        None => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("jane@example.com"), "j***@example.com");
        assert_eq!(mask_email("j@example.com"), "***@example.com");
        assert_eq!(mask_email("not-an-email"), "***");
        assert_eq!(mask_email("élodie@exemple.fr"), "é***@exemple.fr");
    }
}
