use std::time::Instant;

use crate::{
    core::{
        bounds::{count_label_width, graph_dims, terminal_geometry, value_bounds},
        color::AnsiColor,
        config::Config,
        constants::{BRAILLE_HORIZONTAL_RESOLUTION, COARSE_BINS},
        error::{ConfigError, PlotError},
    },
    render::{BarPlot, Histogram, Renderer},
};

use super::parse::{HistArgs, WatchArgs};

pub fn hist(a: &HistArgs) -> Result<(), PlotError> {
    let t_sample = Instant::now();
    let params = a.sampler.params();
    let transform = a.sampler.transform.as_fn();

    let samples: Vec<f64> = if a.batch {
        let mut batch = params.batch();
        if let Some(f) = transform {
            for v in &mut batch {
                *v = f(*v);
            }
        }
        batch
    } else {
        match transform {
            Some(f) => params.stream_with(f).collect(),
            None => params.stream().collect(),
        }
    };
    let sample_us = t_sample.elapsed().as_micros();

    if samples.is_empty() {
        return Err(PlotError::EmptyData);
    }
    let requested = if a.coarse { COARSE_BINS } else { a.bins };
    if requested == 0 {
        return Err(ConfigError::ZeroBins.into());
    }

    // config
    let color = AnsiColor::parse(&a.color)?;
    let (lo, hi) = value_bounds(&samples);
    let term = terminal_geometry();
    // sample count bounds the tallest bin, so it bounds the label width too
    let (x_chars, y_chars) = graph_dims(term, requested, count_label_width(samples.len()));
    let bins = requested.min(x_chars * BRAILLE_HORIZONTAL_RESOLUTION);

    let hist = Histogram::from_samples(&samples, bins, (lo, hi));
    let title = a
        .title
        .clone()
        .unwrap_or_else(|| a.sampler.transform.default_title().to_owned());

    let cfg = Config::builder(x_chars, y_chars)
        .title(title)
        .subtitle_opt(&a.subtitle)
        .color(color)
        .max_count(hist.max_count())
        .x_range(lo, hi)
        .build()?;

    let plot = BarPlot::from_histogram(&hist, cfg.y_chars);
    if a.debug {
        eprintln!(
            "sampling: {sample_us} µs   ({} samples into {bins} bins)",
            samples.len()
        );
    }
    Renderer::full().render(&cfg, &plot)
}

pub fn watch(a: &WatchArgs) -> Result<(), PlotError> {
    if a.bins == 0 {
        return Err(ConfigError::ZeroBins.into());
    }
    let params = a.sampler.params();
    let color = AnsiColor::parse(&a.color)?;
    let subtitle = format!(
        "x' = ({}x + {}) mod {}",
        params.multiplier, params.increment, params.modulus
    );

    let mut stream = match a.sampler.transform.as_fn() {
        Some(f) => params.stream_with(f),
        None => params.stream(),
    }
    .peekable();
    if stream.peek().is_none() {
        return Err(PlotError::EmptyData);
    }

    let mut samples: Vec<f64> = Vec::new();
    let mut renderer = Renderer::delta();
    let frame_pause = std::time::Duration::from_micros(1_000_000 / a.fps.max(1));
    let per_frame = a.per_frame.max(1);

    let watch_start = Instant::now();
    let mut total_setup_us: u128 = 0;
    let mut total_processing_us: u128 = 0;
    let mut total_render_us: u128 = 0;
    let mut frame_no: usize = 0;

    while stream.peek().is_some() {
        let t0 = Instant::now();
        for _ in 0..per_frame {
            let Some(v) = stream.next() else { break };
            samples.push(v);
        }

        // Bounds drift while samples arrive, so everything is recomputed
        // per frame; terminal geometry too (handles resizes).
        let (lo, hi) = value_bounds(&samples);
        let term = terminal_geometry();
        let (x_chars, y_chars) = graph_dims(term, a.bins, count_label_width(samples.len()));
        let bins = a.bins.min(x_chars * BRAILLE_HORIZONTAL_RESOLUTION);
        total_setup_us += t0.elapsed().as_micros();

        let t1 = Instant::now();
        let hist = Histogram::from_samples(&samples, bins, (lo, hi));
        let cfg = Config::builder(x_chars, y_chars)
            .title(a.sampler.transform.default_title())
            .subtitle(subtitle.clone())
            .color(color)
            .max_count(hist.max_count())
            .x_range(lo, hi)
            .build()?;
        let plot = BarPlot::from_histogram(&hist, cfg.y_chars);
        total_processing_us += t1.elapsed().as_micros();

        let t2 = Instant::now();
        renderer.render(&cfg, &plot)?;
        total_render_us += t2.elapsed().as_micros();
        frame_no += 1;

        std::thread::sleep(frame_pause);
    }

    if a.debug && frame_no > 0 {
        let total_us = watch_start.elapsed().as_micros();
        eprintln!(
            "watch complete: {frame_no} frames   {} samples   total {total_us} µs\n   avg render {:.1} µs   avg setup {:.1}µs   avg processing {:.1}µs",
            samples.len(),
            total_render_us as f64 / frame_no as f64,
            total_setup_us as f64 / frame_no as f64,
            total_processing_us as f64 / frame_no as f64,
        );
    }
    Ok(())
}

/// Pretty-print available color names + an example hex code.
pub fn colors() {
    use crate::core::color::colorize;

    println!("\nPossible colors:");
    for (code, name) in [
        (30, "black"),
        (31, "red"),
        (32, "green"),
        (33, "yellow"),
        (34, "blue"),
        (35, "magenta"),
        (36, "cyan"),
        (37, "white"),
    ] {
        println!("{}", colorize(AnsiColor::Basic(code), name));
    }
    println!("{}", colorize(AnsiColor::DEFAULT, "steel | default"));
    println!(
        "{}  (#505050 or any other #RRGGBB)\n",
        colorize(AnsiColor::Rgb(0x50, 0x50, 0x50), "#505050")
    );
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "cargo run"; // adjust if you rename the binary
    println!(
        "
Example invocations
-------------------
• Uniform histogram   : {bin} hist
• Logistic transform  : {bin} hist --transform logistic
• Exponential         : {bin} hist --transform exponential --coarse
• Eager (batch) mode  : {bin} hist --batch
• Custom recurrence   : {bin} hist --seed 1 --modulus 65536 --multiplier 75 --increment 74
• Named color         : {bin} hist --color blue
• Hex color           : {bin} hist --color #6048c1
• Animated fill       : {bin} watch --per-frame 8 --fps 30
• Debug mode          : {bin} hist --debug
"
    );
}
