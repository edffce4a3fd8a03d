// EmailJS credentials get baked in at compile time, so pull them out of a .env if there is one and
// hand them to rustc so that `option_env!` can see them
const VARS: [&str; 3] = ["EMAILJS_SERVICE_ID", "EMAILJS_TEMPLATE_ID", "EMAILJS_PUBLIC_KEY"];

fn main() {
	if let Ok(path) = dotenv::dotenv() {
		println!("cargo:rerun-if-changed={}", path.display());
	}

	for var in VARS {
		println!("cargo:rerun-if-env-changed={var}");

		if let Ok(val) = dotenv::var(var) {
			println!("cargo:rustc-env={var}={val}");
		}
	}
}
