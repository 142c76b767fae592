fn main() {
    let code = xclip_wrapper::run(std::env::args_os().skip(1));
    std::process::exit(code);
}
