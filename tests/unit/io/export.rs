//! Tests for PNG, preview, CSV and palette exports

#[cfg(test)]
mod tests {
    use ndarray::array;
    use stitchchart::analysis::rows::RowSummary;
    use stitchchart::io::configuration::GRID_LINE_RGB;
    use stitchchart::io::export::{
        PreviewOptions, chart_csv, dimensions_summary, encode_png, encode_preview_png,
        palette_hex, render_chart, render_preview, rows_csv,
    };
    use stitchchart::{Chart, ChartError, ChartGrid, Palette};

    const WHITE: [u8; 3] = [255, 255, 255];
    const NAVY: [u8; 3] = [0, 0, 128];

    fn sample_chart() -> Chart {
        Chart {
            grid: ChartGrid::from_array(array![[0, 1, 0], [1, 1, 1]]),
            palette: Palette::new(vec![WHITE, NAVY]),
        }
    }

    // Tests chart rendering maps each cell to its palette color
    // Verified by rendering indices as gray levels
    #[test]
    fn test_render_chart_pixels() {
        let img = render_chart(&sample_chart()).unwrap();

        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(img.get_pixel(0, 0).0, WHITE);
        assert_eq!(img.get_pixel(1, 0).0, NAVY);
        assert_eq!(img.get_pixel(2, 1).0, NAVY);
    }

    // Tests preview enlarges every cell into a uniform block
    // Verified by interpolating block edges
    #[test]
    fn test_render_preview_blocks() {
        let options = PreviewOptions {
            block_size: 4,
            grid_lines: false,
        };
        let img = render_preview(&sample_chart(), &options).unwrap();

        assert_eq!(img.dimensions(), (12, 8));
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(img.get_pixel(x, y).0, WHITE);
                assert_eq!(img.get_pixel(x + 4, y).0, NAVY);
            }
        }
    }

    // Tests grid lines are drawn on the block edges only
    // Verified by drawing lines on the bottom edge
    #[test]
    fn test_render_preview_grid_lines() {
        let options = PreviewOptions {
            block_size: 5,
            grid_lines: true,
        };
        let img = render_preview(&sample_chart(), &options).unwrap();

        assert_eq!(img.get_pixel(0, 0).0, GRID_LINE_RGB);
        assert_eq!(img.get_pixel(5, 2).0, GRID_LINE_RGB);
        assert_eq!(img.get_pixel(2, 5).0, GRID_LINE_RGB);
        assert_eq!(img.get_pixel(1, 1).0, WHITE);
        assert_eq!(img.get_pixel(6, 6).0, NAVY);
    }

    // Tests block size bounds
    // Verified by accepting a zero block size
    #[test]
    fn test_render_preview_invalid_block_size() {
        for block_size in [0, 65] {
            let options = PreviewOptions {
                block_size,
                grid_lines: false,
            };
            let result = render_preview(&sample_chart(), &options);
            assert!(matches!(result, Err(ChartError::InvalidParameter { .. })));
        }
    }

    // Tests preview options validate without a chart
    // Verified by widening the accepted block size range
    #[test]
    fn test_preview_options_validate() {
        assert!(PreviewOptions::default().validate().is_ok());
        for block_size in [1, 64] {
            let options = PreviewOptions {
                block_size,
                grid_lines: true,
            };
            assert!(options.validate().is_ok());
        }
        for block_size in [0, 65] {
            let options = PreviewOptions {
                block_size,
                grid_lines: false,
            };
            match options.validate() {
                Err(ChartError::InvalidParameter { parameter, .. }) => {
                    assert_eq!(parameter, "block_size");
                }
                other => unreachable!("expected InvalidParameter, got {other:?}"),
            }
        }
    }

    // Tests cells pointing outside the palette are reported
    // Verified by substituting black for missing entries
    #[test]
    fn test_render_invalid_palette_index() {
        let chart = Chart {
            grid: ChartGrid::from_array(array![[0, 2]]),
            palette: Palette::new(vec![WHITE]),
        };

        let result = render_chart(&chart);
        assert!(matches!(
            result,
            Err(ChartError::InvalidPaletteIndex {
                index: 2,
                palette_len: 1
            })
        ));
    }

    // Tests PNG output decodes back to the chart colors
    // Verified by encoding the preview instead of the chart
    #[test]
    fn test_encode_png_round_trip() {
        let bytes = encode_png(&sample_chart()).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgb8();

        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(decoded.get_pixel(1, 0).0, NAVY);
        assert_eq!(decoded.get_pixel(0, 0).0, WHITE);
    }

    // Tests exports are byte-identical across runs
    // Verified by embedding a timestamp chunk
    #[test]
    fn test_exports_are_idempotent() {
        let chart = sample_chart();
        let options = PreviewOptions::default();

        assert_eq!(encode_png(&chart).unwrap(), encode_png(&chart).unwrap());
        assert_eq!(
            encode_preview_png(&chart, &options).unwrap(),
            encode_preview_png(&chart, &options).unwrap()
        );
        assert_eq!(chart_csv(&chart), chart_csv(&chart));
    }

    // Tests the exact CSV layout
    // Verified by dropping the trailing newline
    #[test]
    fn test_rows_csv_format() {
        let rows = [
            RowSummary {
                row_index: 0,
                stitch_count: 3,
                distinct_colors: 2,
            },
            RowSummary {
                row_index: 1,
                stitch_count: 3,
                distinct_colors: 1,
            },
        ];

        assert_eq!(
            rows_csv(&rows),
            "Row,Stitch Count,Colors\n0,3,2\n1,3,1\n"
        );
        assert_eq!(rows_csv(&[]), "Row,Stitch Count,Colors\n");
    }

    // Tests chart CSV derives row statistics from the grid
    // Verified by counting colors over the whole chart
    #[test]
    fn test_chart_csv() {
        assert_eq!(
            chart_csv(&sample_chart()),
            "Row,Stitch Count,Colors\n0,3,2\n1,3,1\n"
        );
    }

    // Tests palette hex strings and dimension summary
    // Verified by swapping width and height in the summary
    #[test]
    fn test_palette_hex_and_summary() {
        let chart = sample_chart();

        assert_eq!(palette_hex(&chart.palette), vec!["#FFFFFF", "#000080"]);
        assert_eq!(dimensions_summary(&chart), "3W × 2H stitches");
    }
}
