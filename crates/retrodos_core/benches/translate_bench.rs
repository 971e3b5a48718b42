/*
    retrodos
    https://github.com/retrodos/retrodos

    Copyright 2024-2025 The retrodos developers

    Permission is hereby granted, free of charge, to any person obtaining a
    copy of this software and associated documentation files (the “Software”),
    to deal in the Software without restriction, including without limitation
    the rights to use, copy, modify, merge, publish, distribute, sublicense,
    and/or sell copies of the Software, and to permit persons to whom the
    Software is furnished to do so, subject to the following conditions:

    The above copyright notice and this permission notice shall be included in
    all copies or substantial portions of the Software.

    THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
    IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
    FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
    AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
    LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
    FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
    DEALINGS IN THE SOFTWARE.

    --------------------------------------------------------------------------

    benches::translate_bench.rs

    Benchmarks for the translation pipeline.

*/

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use retrodos_core::{
    entry::parse,
    pipeline::{translate, TranslationRequest},
    schema::SchemaSet,
    template::TemplateKind,
};

const GAME_OVERRIDE: &str = "ver.22.03.14\r\n\
4|1|svga_s3\r\n\
7|3|64\r\n\
8|0|dynamic\r\n\
8|2|max\r\n\
20|0|1024x16\r\n\
20|1|true\r\n\
20|4|mpu401\r\n\
21|0|software\r\n\
99|99|ignored\r\n";

const PRESET: &str = "6|0|normal\n6|2|fixed 20000\n7|3|32\n16|7|200\n21|1|800x16\n";

pub fn translate_bench(c: &mut Criterion) {
    let schemas = SchemaSet::builtin();

    c.bench_function("translate_parse_override", |b| {
        b.iter(|| parse(black_box(GAME_OVERRIDE)));
    });

    let preset = parse(PRESET);
    let game = parse(GAME_OVERRIDE);

    c.bench_function("translate_direct_win98", |b| {
        let request = TranslationRequest::new("win98")
            .with_preset(&preset)
            .with_game(&game)
            .with_autoexec("boot c:\n");

        b.iter(|| translate(black_box(&request), schemas));
    });

    c.bench_function("translate_template_win98", |b| {
        let request = TranslationRequest::new("win98")
            .with_preset(&preset)
            .with_game(&game)
            .with_template(TemplateKind::Win98.builtin_text())
            .with_autoexec("boot c:\n");

        b.iter(|| translate(black_box(&request), schemas));
    });
}

criterion_group!(benches, translate_bench);
criterion_main!(benches);
