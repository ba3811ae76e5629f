// benches/calendar.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use eco_scrape::specs::calendar::extract;

/// Weekly page with `n` event rows and a day separator every fifth row.
fn synthetic_page(n: usize) -> String {
    let mut rows = String::new();
    for i in 0..n {
        if i % 5 == 0 {
            rows.push_str(r#"<tr class="theDay"><td class="theDay" colspan="9">Some Day</td></tr>"#);
        }
        let id = 100_000 + i;
        rows.push_str(&format!(
            r#"<tr id="eventRowId_{id}" data-event-datetime="2026/08/03 08:30:00">
<td class="first left time js-time">08:30</td>
<td class="left flagCur noWrap"><span title="United States" class="ceFlags"></span> USD</td>
<td class="left textNum sentiment noWrap"><i class="grayFullBullishIcon"></i><i class="grayFullBullishIcon"></i><i class="grayEmptyBullishIcon"></i></td>
<td class="left event"><a href="/economic-calendar/event-{id}" target="_blank">&nbsp;Indicator {id}</a></td>
<td class="bold act blackFont event-{id}-actual">1.2%</td>
<td class="fore event-{id}-forecast">1.0%</td>
<td class="prev blackFont event-{id}-previous">0.9%</td>
<td class="alert"></td>
</tr>"#
        ));
    }
    format!(
        r#"<html><body><table id="economicCalendarData"><tbody>{rows}</tbody></table></body></html>"#
    )
}

fn bench_extract(c: &mut Criterion) {
    let doc = synthetic_page(200);
    c.bench_function("calendar_extract_200", |b| {
        b.iter(|| {
            let ex = extract(black_box(&doc), "https://uk.investing.com").unwrap();
            black_box(ex.table.len())
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
