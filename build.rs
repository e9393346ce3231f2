fn main() {
    let now = time::OffsetDateTime::now_utc();
    let date = std::env::var("PSE_BUILD_DATE").unwrap_or_else(|_| {
        time::format_description::parse("[year]-[month]-[day]")
            .ok()
            .and_then(|fmt| now.format(&fmt).ok())
            .unwrap_or_else(|| "unknown".to_string())
    });

    println!("cargo:rustc-env=PSE_BUILD_DATE={}", date);
    println!("cargo:rerun-if-env-changed=PSE_BUILD_DATE");
}
