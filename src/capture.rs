use crate::config::{CaptureConfig, Config, PerformanceConfig};
use crate::filter;

const KB_PER_MB: u64 = 1024;

/// Maps a capture config onto tshark arguments.
///
/// Token order follows tshark's own option parsing: interface, output, ring
/// buffer, capture filter, display filter, then performance flags. Nothing is
/// validated here; tshark rejects combinations it does not accept.
pub fn build_tshark_args(config: &Config) -> Vec<String> {
    let mut args = Vec::new();

    if let Some(capture) = &config.capture {
        push_capture_args(&mut args, capture);
    }

    if let Some(f) = filter::join_filters(config.filters.as_deref()) {
        args.push("-f".to_string());
        args.push(filter::quoted(&f));
    }

    if let Some(f) = filter::join_filters(config.display_filters.as_deref()) {
        args.push("-Y".to_string());
        args.push(filter::quoted(&f));
    }

    if let Some(perf) = &config.performance {
        push_performance_args(&mut args, perf);
    }

    args
}

fn push_capture_args(args: &mut Vec<String>, capture: &CaptureConfig) {
    if let Some(iface) = &capture.interface {
        args.push("-i".to_string());
        args.push(iface.clone());
    }

    if let Some(output) = &capture.output {
        args.push("-w".to_string());
        args.push(output.clone());
    }

    // 仅在开启轮转时输出 ring buffer 参数，每个子项一个 -b。
    if capture.rotate != Some(true) {
        return;
    }
    if let Some(n) = capture.max_files {
        args.push("-b".to_string());
        args.push(format!("files:{n}"));
    }
    if let Some(secs) = capture.rotate_interval {
        args.push("-b".to_string());
        args.push(format!("duration:{secs}"));
    }
    if let Some(mb) = capture.max_size {
        args.push("-b".to_string());
        args.push(format!("filesize:{}", mb.saturating_mul(KB_PER_MB)));
    }
}

fn push_performance_args(args: &mut Vec<String>, perf: &PerformanceConfig) {
    if let Some(mb) = perf.buffer_size {
        args.push("-B".to_string());
        args.push(mb.saturating_mul(KB_PER_MB).to_string());
    }
    if let Some(count) = perf.max_packets {
        args.push("-c".to_string());
        args.push(count.to_string());
    }
    if perf.promiscuous_mode == Some(true) {
        args.push("-p".to_string());
    }
}

/// Renders the program and its arguments as one space-separated line for logs.
pub fn render_command(program: &str, args: &[String]) -> String {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}
