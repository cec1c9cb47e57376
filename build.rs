pub fn main() {
    println!("cargo:rerun-if-env-changed=DEFMT_LOG");

    // 链接脚本只用于固件；主机测试构建不需要
    let target = std::env::var("TARGET").unwrap_or_default();
    if target.starts_with("thumb") {
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
        println!("cargo:rustc-link-arg-bins=--nmagic");
        println!("cargo:rustc-link-arg-bins=-Tlink.x");
    }
}
