/// Holds an access token, it can't be printed by accident
///
/// ```compile_fail
/// use dingtalk::utils::secret_str::SecretString;
/// let x: SecretString = "".into();
/// println!("{:?}", x);
/// ```
///
/// ```compile_fail
/// use dingtalk::utils::secret_str::SecretString;
/// let x: SecretString = "".into();
/// tracing::info!(token = %x);
/// ```

#[derive(Clone, Default, PartialEq)]
pub struct SecretString(String);

impl SecretString {
    /// ```
    /// use dingtalk::utils::secret_str::SecretString;
    ///
    /// let x: SecretString = "8a5f1c".into();
    /// assert_eq!(x.reveal_secret(), "8a5f1c");
    /// ```
    pub fn reveal_secret(&self) -> &str {
        &self.0
    }

    /// ```
    /// use dingtalk::utils::secret_str::SecretString;
    ///
    /// assert!(SecretString::default().is_empty());
    /// assert!(!SecretString::from("t").is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for SecretString {
    fn from(secret: &str) -> Self {
        SecretString(secret.to_string())
    }
}

impl From<String> for SecretString {
    fn from(secret: String) -> Self {
        SecretString(secret)
    }
}
