use support_core::EmailJsConfig;

// Filled in by build.rs from the environment or a .env file. Anything missing is only complained
// about when someone hits 'Send'
pub fn emailjs_config() -> EmailJsConfig {
	EmailJsConfig::new(
		option_env!("EMAILJS_SERVICE_ID"),
		option_env!("EMAILJS_TEMPLATE_ID"),
		option_env!("EMAILJS_PUBLIC_KEY")
	)
}
