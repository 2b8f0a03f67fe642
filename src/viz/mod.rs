use crate::storage::repository::report_repo::{
    ActivityBucketRow, CategoryShareRow, HelpfulByRatingRow, LengthBucketRow, MonthCountRow,
    RatingCountRow,
};
use crate::storage::repository::ReportRepository;
use anyhow::Result;
use log::info;
use plotters::prelude::*;
use sea_orm::DatabaseConnection;
use std::path::Path;

const PIE_COLORS: [RGBColor; 6] = [
    RGBColor(102, 153, 255),
    RGBColor(255, 153, 102),
    RGBColor(120, 200, 120),
    RGBColor(220, 120, 180),
    RGBColor(200, 200, 90),
    RGBColor(150, 120, 220),
];

const LENGTH_BUCKET_ORDER: [&str; 4] = ["0-50", "50-200", "200-500", "500+"];
const ACTIVITY_BUCKET_ORDER: [&str; 4] = ["1", "2-5", "6-10", "10+"];

/// Data for the six dashboard panels, all pulled from the report queries;
/// rendering adds no computation of its own.
pub struct DashboardData {
    pub rating_counts: Vec<RatingCountRow>,
    pub reviews_over_time: Vec<MonthCountRow>,
    pub category_share: Vec<CategoryShareRow>,
    pub length_buckets: Vec<LengthBucketRow>,
    pub helpful_by_rating: Vec<HelpfulByRatingRow>,
    pub activity_buckets: Vec<ActivityBucketRow>,
}

impl DashboardData {
    pub async fn collect(db: &DatabaseConnection) -> Result<Self> {
        Ok(Self {
            rating_counts: ReportRepository::rating_counts(db).await?,
            reviews_over_time: ReportRepository::reviews_over_time(db).await?,
            category_share: ReportRepository::category_share(db).await?,
            length_buckets: ReportRepository::length_buckets(db).await?,
            helpful_by_rating: ReportRepository::helpful_votes_by_rating(db).await?,
            activity_buckets: ReportRepository::reviewer_activity_buckets(db).await?,
        })
    }
}

/// Render the 2×3 dashboard image, overwriting any previous file.
pub async fn render_dashboard(db: &DatabaseConnection, out_path: &Path) -> Result<()> {
    let data = DashboardData::collect(db).await?;
    draw_dashboard(&data, out_path)?;
    println!("📈 Dashboard saved to {}", out_path.display());
    Ok(())
}

pub fn draw_dashboard(data: &DashboardData, out_path: &Path) -> Result<()> {
    let root = BitMapBackend::new(out_path, (1800, 1200)).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(
        "Amazon Product Reviews Analysis Dashboard",
        ("sans-serif", 36),
    )?;

    let panels = root.split_evenly((2, 3));

    draw_rating_histogram(&panels[0], &data.rating_counts)?;
    draw_reviews_over_time(&panels[1], &data.reviews_over_time)?;
    draw_pie(
        &panels[2],
        "Reviews by Category",
        &data
            .category_share
            .iter()
            .map(|r| (r.category.clone(), r.review_count as f64))
            .collect::<Vec<_>>(),
    )?;
    draw_length_histogram(&panels[3], &data.length_buckets)?;
    draw_helpfulness_line(&panels[4], &data.helpful_by_rating)?;
    draw_pie(
        &panels[5],
        "Reviewer Activity Levels",
        &ordered_buckets(&data.activity_buckets),
    )?;

    root.present()?;
    info!("dashboard written to {}", out_path.display());
    Ok(())
}

fn ordered_buckets(rows: &[ActivityBucketRow]) -> Vec<(String, f64)> {
    ACTIVITY_BUCKET_ORDER
        .iter()
        .filter_map(|level| {
            rows.iter()
                .find(|r| r.activity_level == *level)
                .map(|r| (level.to_string(), r.reviewer_count as f64))
        })
        .collect()
}

fn draw_rating_histogram<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    rows: &[RatingCountRow],
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let max = rows.iter().map(|r| r.count).max().unwrap_or(1);
    let mut chart = ChartBuilder::on(area)
        .caption("Rating Distribution", ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d((0i64..5i64).into_segmented(), 0i64..max + max / 10 + 1)?;
    chart
        .configure_mesh()
        .x_desc("Star Rating")
        .y_desc("Number of Reviews")
        .draw()?;
    chart.draw_series(
        Histogram::vertical(&chart)
            .style(RGBColor(135, 206, 235).filled())
            .margin(8)
            .data(rows.iter().map(|r| (r.rating, r.count))),
    )?;
    Ok(())
}

fn draw_reviews_over_time<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    rows: &[MonthCountRow],
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let max = rows.iter().map(|r| r.review_count).max().unwrap_or(1);
    let n = rows.len().max(1);
    let mut chart = ChartBuilder::on(area)
        .caption("Reviews Over Time", ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0usize..n, 0i64..max + max / 10 + 1)?;
    chart
        .configure_mesh()
        .x_desc("Month")
        .y_desc("Number of Reviews")
        .x_label_formatter(&|idx| {
            rows.get(*idx)
                .map(|r| r.month.clone())
                .unwrap_or_default()
        })
        .draw()?;
    chart.draw_series(LineSeries::new(
        rows.iter().enumerate().map(|(i, r)| (i, r.review_count)),
        BLUE.stroke_width(2),
    ))?;
    chart.draw_series(
        rows.iter()
            .enumerate()
            .map(|(i, r)| Circle::new((i, r.review_count), 3, BLUE.filled())),
    )?;
    Ok(())
}

fn draw_length_histogram<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    rows: &[LengthBucketRow],
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let counts: Vec<i64> = LENGTH_BUCKET_ORDER
        .iter()
        .map(|g| {
            rows.iter()
                .find(|r| r.length_group == *g)
                .map(|r| r.count)
                .unwrap_or(0)
        })
        .collect();
    let max = counts.iter().copied().max().unwrap_or(1);

    let mut chart = ChartBuilder::on(area)
        .caption("Review Length Distribution", ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(
            (0usize..LENGTH_BUCKET_ORDER.len() - 1).into_segmented(),
            0i64..max + max / 10 + 1,
        )?;
    chart
        .configure_mesh()
        .x_desc("Review Length (chars)")
        .y_desc("Number of Reviews")
        .x_label_formatter(&|v| match v {
            SegmentValue::CenterOf(i) => LENGTH_BUCKET_ORDER
                .get(*i)
                .map(|s| s.to_string())
                .unwrap_or_default(),
            _ => String::new(),
        })
        .draw()?;
    chart.draw_series(
        Histogram::vertical(&chart)
            .style(RGBColor(144, 238, 144).filled())
            .margin(10)
            .data(counts.iter().enumerate().map(|(i, c)| (i, *c))),
    )?;
    Ok(())
}

fn draw_helpfulness_line<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    rows: &[HelpfulByRatingRow],
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let max = rows
        .iter()
        .map(|r| r.avg_helpful_votes)
        .fold(1.0f64, f64::max);
    let mut chart = ChartBuilder::on(area)
        .caption("Helpfulness vs Rating", ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0i64..5i64, 0.0..max * 1.1)?;
    chart
        .configure_mesh()
        .x_desc("Star Rating")
        .y_desc("Average Helpful Votes")
        .draw()?;
    chart.draw_series(LineSeries::new(
        rows.iter().map(|r| (r.rating, r.avg_helpful_votes)),
        RGBColor(255, 127, 80).stroke_width(2),
    ))?;
    chart.draw_series(rows.iter().map(|r| {
        Circle::new(
            (r.rating, r.avg_helpful_votes),
            4,
            RGBColor(255, 127, 80).filled(),
        )
    }))?;
    Ok(())
}

fn draw_pie<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    title: &str,
    slices: &[(String, f64)],
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let area = area.titled(title, ("sans-serif", 24))?;
    if slices.is_empty() {
        return Ok(());
    }

    let (w, h) = area.dim_in_pixel();
    let center = (w as i32 / 2, h as i32 / 2);
    let radius = (w.min(h) as f64) * 0.35;

    let sizes: Vec<f64> = slices.iter().map(|(_, v)| *v).collect();
    let labels: Vec<String> = slices.iter().map(|(l, _)| l.clone()).collect();
    let colors: Vec<RGBColor> = (0..slices.len())
        .map(|i| PIE_COLORS[i % PIE_COLORS.len()])
        .collect();

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.label_style(("sans-serif", 18).into_font());
    pie.percentages(("sans-serif", 14).into_font());
    area.draw(&pie)?;
    Ok(())
}

/// Box plot of sentiment polarity grouped by star rating; one box per
/// rating value that has at least one scored sample.
pub fn draw_sentiment_boxplot(
    polarity_by_rating: &[(i64, Vec<f64>)],
    out_path: &Path,
) -> Result<()> {
    let root = BitMapBackend::new(out_path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Sentiment Polarity by Star Rating", ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d((0i64..5i64).into_segmented(), -1.0f32..1.0f32)?;
    chart
        .configure_mesh()
        .x_desc("Star Rating")
        .y_desc("Sentiment Polarity")
        .draw()?;

    chart.draw_series(polarity_by_rating.iter().filter_map(|(rating, values)| {
        if values.is_empty() {
            return None;
        }
        let quartiles = Quartiles::new(values);
        Some(
            Boxplot::new_vertical(SegmentValue::CenterOf(*rating), &quartiles)
                .width(30)
                .style(&BLUE),
        )
    }))?;

    root.present()?;
    info!("sentiment chart written to {}", out_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_data() -> DashboardData {
        DashboardData {
            rating_counts: vec![
                RatingCountRow { rating: 1, count: 3 },
                RatingCountRow { rating: 5, count: 12 },
            ],
            reviews_over_time: vec![
                MonthCountRow { month: "2014-01".into(), review_count: 8 },
                MonthCountRow { month: "2014-02".into(), review_count: 7 },
            ],
            category_share: vec![
                CategoryShareRow { category: "books".into(), review_count: 9 },
                CategoryShareRow { category: "electronics".into(), review_count: 6 },
            ],
            length_buckets: vec![LengthBucketRow {
                length_group: "50-200".into(),
                count: 10,
                avg_rating: 4.0,
            }],
            helpful_by_rating: vec![
                HelpfulByRatingRow { rating: 1, avg_helpful_votes: 0.5 },
                HelpfulByRatingRow { rating: 5, avg_helpful_votes: 2.0 },
            ],
            activity_buckets: vec![ActivityBucketRow {
                activity_level: "1".into(),
                reviewer_count: 4,
            }],
        }
    }

    #[test]
    fn dashboard_renders_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashboard.png");
        draw_dashboard(&sample_data(), &path).unwrap();
        assert!(path.metadata().unwrap().len() > 0);
    }

    #[test]
    fn sentiment_boxplot_skips_empty_ratings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sentiment.png");
        let data = vec![
            (5, vec![0.4, 0.6, 0.9, 0.2]),
            (3, vec![]),
            (1, vec![-0.5, -0.2, 0.1]),
        ];
        draw_sentiment_boxplot(&data, &path).unwrap();
        assert!(path.metadata().unwrap().len() > 0);
    }

    #[test]
    fn activity_buckets_keep_fixed_order() {
        let rows = vec![
            ActivityBucketRow { activity_level: "10+".into(), reviewer_count: 1 },
            ActivityBucketRow { activity_level: "1".into(), reviewer_count: 5 },
        ];
        let ordered = ordered_buckets(&rows);
        assert_eq!(ordered[0].0, "1");
        assert_eq!(ordered[1].0, "10+");
    }
}
