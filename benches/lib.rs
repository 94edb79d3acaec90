/*!
# Benchmark: `htattrs`
*/

use criterion::{
	Criterion,
	criterion_group,
	criterion_main,
};



fn element_attributes(c: &mut Criterion) {
	let mut group = c.benchmark_group("htattrs::element_attributes");

	for tag in ["input", "video", "marquee"].iter() {
		group.bench_function(format!("{tag:?}"), move |b| {
			b.iter(|| htattrs::element_attributes(tag))
		});
	}

	group.finish();
}

fn attribute_elements(c: &mut Criterion) {
	let mut group = c.benchmark_group("htattrs::attribute_elements");

	for attr in ["href", "class", "onclick"].iter() {
		group.bench_function(format!("{attr:?}"), move |b| {
			b.iter(|| htattrs::attribute_elements(attr))
		});
	}

	group.finish();
}

fn can_have_attribute(c: &mut Criterion) {
	let mut group = c.benchmark_group("htattrs::can_have_attribute");

	for (tag, attr) in [
		("a", "href"),
		("button", "href"),
		("my-custom-tag", "class"),
	].iter() {
		group.bench_function(format!("{tag:?} {attr:?}"), move |b| {
			b.iter(|| htattrs::can_have_attribute(tag, attr))
		});
	}

	group.finish();
}



criterion_group!(
	benches,
	element_attributes,
	attribute_elements,
	can_have_attribute,
);
criterion_main!(benches);
