//! Criterion benchmarks for the echo effect.
//!
//! Run with: cargo bench
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use resono_effects::{
    DeviceContext, EchoProps, EchoState, EffectProps, EffectSlot, EffectState,
};

const SAMPLE_RATE: u32 = 48000;
const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512, 1024];

fn generate_test_signal(size: usize) -> Vec<f32> {
    (0..size)
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE as f32;
            (2.0 * std::f32::consts::PI * 440.0 * t).sin() * 0.5
        })
        .collect()
}

fn bench_echo_process(c: &mut Criterion) {
    let device = DeviceContext::new(SAMPLE_RATE);
    let props = EchoProps {
        delay: 0.09,
        lr_delay: 0.06,
        damping: 0.4,
        feedback: 0.7,
        spread: 0.5,
    };

    let mut group = c.benchmark_group("EchoState::process");
    for &block_size in BLOCK_SIZES {
        let input = generate_test_signal(block_size);

        group.bench_with_input(
            BenchmarkId::from_parameter(block_size),
            &block_size,
            |b, _| {
                let mut echo = EchoState::new();
                echo.device_update(&device);
                echo.update(&device, &EffectSlot::default(), &EffectProps::Echo(props));
                let mut bus: Vec<Vec<f32>> =
                    (0..device.channels).map(|_| vec![0.0; block_size]).collect();
                b.iter(|| {
                    for channel in &mut bus {
                        channel.fill(0.0);
                    }
                    echo.process(block_size, black_box(&input), &mut bus);
                    black_box(bus[0][0])
                })
            },
        );
    }
    group.finish();
}

fn bench_echo_update(c: &mut Criterion) {
    let device = DeviceContext::new(SAMPLE_RATE);
    let mut echo = EchoState::new();
    echo.device_update(&device);

    c.bench_function("EchoState::update", |b| {
        let mut spread = 0.0f32;
        b.iter(|| {
            spread = (spread + 0.01) % 1.0;
            let props = EchoProps {
                spread,
                ..EchoProps::default()
            };
            echo.update(
                &device,
                &EffectSlot::default(),
                &EffectProps::Echo(black_box(props)),
            );
        })
    });
}

criterion_group!(benches, bench_echo_process, bench_echo_update);
criterion_main!(benches);
