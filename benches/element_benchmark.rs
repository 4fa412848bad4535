use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use jsontree::{
    element::{JsonArray, JsonElement, JsonObject},
    writer::{JsonStreamWriter, JsonWriter},
};

fn create_element() -> JsonElement {
    let mut array = JsonArray::new();
    for i in 0..1000 {
        let mut object = JsonObject::new();
        object.add_integer("id", i);
        object.add_string("name", format!("item {i}"));
        object.add_float("ratio", i as f64 / 7.0);
        object.add_boolean("even", i % 2 == 0);
        object.add_null("missing");

        let tags: JsonArray = (0..5).map(|t| format!("tag{t}")).collect();
        object.add("tags", tags);
        array.add(object);
    }
    array.into()
}

fn benchmark_write_element(c: &mut Criterion) {
    let element = create_element();
    let mut group = c.benchmark_group("write-element");

    group.bench_with_input("jsontree", &element, |b, element| {
        b.iter(|| {
            let mut json_writer = JsonStreamWriter::new();
            element.write_to(&mut json_writer).unwrap();
            black_box(json_writer.finish_document().unwrap());
        })
    });
    group.bench_with_input("serde_json (plain value)", &element, |b, element| {
        b.iter(|| black_box(element.to_plain_value().to_string()))
    });

    group.finish();
}

fn benchmark_plain_value(c: &mut Criterion) {
    let element = create_element();
    let plain_value = element.to_plain_value();

    c.bench_function("to-plain-value", |b| {
        b.iter(|| black_box(element.to_plain_value()))
    });
    c.bench_function("from-plain-value", |b| {
        b.iter(|| black_box(JsonElement::from_plain_value(plain_value.clone())))
    });
}

fn benchmark_object_lookup(c: &mut Criterion) {
    let object: JsonObject = (0..1000).map(|i| (format!("member{i}"), i)).collect();

    c.bench_function("object-lookup", |b| {
        b.iter(|| {
            for i in (0..1000).step_by(7) {
                black_box(object.get_as_integer(&format!("member{i}")).unwrap());
            }
        })
    });
}

criterion_group!(
    benches,
    // Benchmark functions
    benchmark_write_element,
    benchmark_plain_value,
    benchmark_object_lookup
);
criterion_main!(benches);
