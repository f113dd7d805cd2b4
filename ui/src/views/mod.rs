mod signup;
pub use signup::Signup;
