use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::{Deserialize, Serialize};
use serde_json_element::{
    from_element, from_str, to_element, to_string, JsonElement, JsonLiteral, JsonPrimitive,
    PrimitiveView,
};

#[derive(Serialize, Deserialize, Clone)]
struct Measurement {
    sensor: String,
    reading: JsonLiteral,
    calibration: JsonPrimitive,
}

#[derive(Serialize, Deserialize, Clone)]
struct Product {
    sku: String,
    price: f64,
    weight: f32,
    quantity: u32,
}

fn measurements(size: u32) -> Vec<Measurement> {
    (0..size)
        .map(|i| Measurement {
            sensor: format!("sensor-{}", i),
            reading: JsonLiteral::from(f64::from(i) * 0.25),
            calibration: if i % 3 == 0 {
                JsonPrimitive::Null
            } else {
                JsonPrimitive::from(JsonLiteral::from(i))
            },
        })
        .collect()
}

fn benchmark_literal_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("literal_formatting");

    group.bench_function("i64", |b| {
        b.iter(|| JsonLiteral::from(black_box(i64::MIN)))
    });

    group.bench_function("f32", |b| {
        b.iter(|| JsonLiteral::from(black_box(f32::MAX)))
    });

    group.bench_function("f64_plain", |b| {
        b.iter(|| JsonLiteral::from(black_box(123.456f64)))
    });

    group.bench_function("f64_scientific", |b| {
        b.iter(|| JsonLiteral::from(black_box(f64::from_bits(1))))
    });

    group.finish();
}

fn benchmark_serialize_measurements(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_measurements");

    for size in [10, 50, 100, 500].iter() {
        let data = measurements(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| to_string(black_box(data)))
        });
    }
    group.finish();
}

fn benchmark_deserialize_measurements(c: &mut Criterion) {
    let mut group = c.benchmark_group("deserialize_measurements");

    for size in [10, 50, 100, 500].iter() {
        let json = to_string(&measurements(*size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &json, |b, json| {
            b.iter(|| from_str::<Vec<Measurement>>(black_box(json)))
        });
    }
    group.finish();
}

fn benchmark_element_tree(c: &mut Criterion) {
    let products: Vec<Product> = (0..100)
        .map(|i| Product {
            sku: format!("SKU{}", i),
            price: 9.99 + f64::from(i),
            weight: 0.5 * i as f32,
            quantity: i,
        })
        .collect();
    let json = to_string(&products).unwrap();

    let mut group = c.benchmark_group("element_tree");

    group.bench_function("parse", |b| {
        b.iter(|| from_str::<JsonElement>(black_box(&json)))
    });

    let element: JsonElement = from_str(&json).unwrap();
    group.bench_function("print", |b| b.iter(|| to_string(black_box(&element))));

    group.bench_function("to_element", |b| {
        b.iter(|| to_element(black_box(&products)))
    });

    group.bench_function("from_element", |b| {
        b.iter(|| from_element::<Vec<Product>>(black_box(element.clone())))
    });

    group.finish();
}

fn benchmark_primitive_views(c: &mut Criterion) {
    let integer: JsonPrimitive = from_str("2147483647").unwrap();
    let float: JsonPrimitive = from_str("1.7976931348623157E308").unwrap();
    let null = JsonPrimitive::Null;

    let mut group = c.benchmark_group("primitive_views");

    group.bench_function("as_i32", |b| b.iter(|| black_box(&integer).as_i32()));
    group.bench_function("as_f64", |b| b.iter(|| black_box(&float).as_f64()));
    group.bench_function("as_i32_or_null", |b| {
        b.iter(|| black_box(&null).as_i32_or_null())
    });

    group.finish();
}

fn benchmark_comparison_with_json(c: &mut Criterion) {
    let products: Vec<Product> = (0..100)
        .map(|i| Product {
            sku: format!("SKU{}", i),
            price: 9.99 + f64::from(i),
            weight: 0.5 * i as f32,
            quantity: i,
        })
        .collect();

    let mut group = c.benchmark_group("comparison");

    group.bench_function("element_serialize", |b| {
        b.iter(|| serde_json_element::to_string(black_box(&products)))
    });

    group.bench_function("json_serialize", |b| {
        b.iter(|| serde_json::to_string(black_box(&products)))
    });

    let ours = serde_json_element::to_string(&products).unwrap();
    let theirs = serde_json::to_string(&products).unwrap();

    group.bench_function("element_deserialize", |b| {
        b.iter(|| serde_json_element::from_str::<Vec<Product>>(black_box(&ours)))
    });

    group.bench_function("json_deserialize", |b| {
        b.iter(|| serde_json::from_str::<Vec<Product>>(black_box(&theirs)))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_literal_formatting,
    benchmark_serialize_measurements,
    benchmark_deserialize_measurements,
    benchmark_element_tree,
    benchmark_primitive_views,
    benchmark_comparison_with_json
);
criterion_main!(benches);
