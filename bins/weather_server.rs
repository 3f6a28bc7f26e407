use configs::ServiceKind;

fn main() -> std::process::ExitCode {
    server::launch(ServiceKind::Weather)
}
