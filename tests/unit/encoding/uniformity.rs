//! Tests for scan and summed-area uniformity probes

#[cfg(test)]
mod tests {
    use quadcode::encoding::uniformity::{ScanProbe, SummedAreaProbe, UniformityProbe};
    use quadcode::grid::{Pixel, PixelGrid, Region};
    use quadcode::io::configuration::Limits;

    fn sample_grid() -> PixelGrid {
        #[rustfmt::skip]
        let values = [
            1, 1, 0, 0, 1,
            1, 1, 0, 0, 0,
            0, 0, 0, 0, 1,
            1, 0, 1, 1, 1,
        ];
        PixelGrid::from_values(5, 4, &values, &Limits::default()).unwrap()
    }

    // Tests the scan probe on uniform and mixed regions
    // Verified by only checking the first row of the region
    #[test]
    fn test_scan_probe_classifies_regions() {
        let grid = sample_grid();
        let probe = ScanProbe::new(&grid);

        assert_eq!(probe.uniform_value(Region::new(0, 0, 2, 2)), Some(Pixel::Black));
        assert_eq!(probe.uniform_value(Region::new(0, 2, 2, 3)), Some(Pixel::White));
        assert_eq!(probe.uniform_value(Region::new(0, 0, 2, 3)), None);
        assert_eq!(probe.uniform_value(Region::new(3, 2, 3, 1)), Some(Pixel::Black));
        assert_eq!(probe.uniform_value(grid.bounds()), None);
    }

    // Tests black pixel counts from the summed-area table
    // Verified by dropping the top-left correction term
    #[test]
    fn test_summed_area_counts() {
        let grid = sample_grid();
        let probe = SummedAreaProbe::new(&grid);

        assert_eq!(probe.count_black(grid.bounds()), grid.count_black());
        assert_eq!(probe.count_black(Region::new(0, 0, 2, 2)), 4);
        assert_eq!(probe.count_black(Region::new(2, 1, 4, 2)), 4);
        assert_eq!(probe.count_black(Region::new(1, 4, 1, 3)), 2);
    }

    // Tests both probes agree on every sub-rectangle of the sample grid
    // Verified by treating a count of area-1 as uniform in the table probe
    #[test]
    fn test_probes_agree_on_all_regions() {
        let grid = sample_grid();
        let scan = ScanProbe::new(&grid);
        let table = SummedAreaProbe::new(&grid);

        for row in 0..grid.height() {
            for col in 0..grid.width() {
                for height in 1..=grid.height() - row {
                    for width in 1..=grid.width() - col {
                        let region = Region::new(row, col, width, height);
                        assert_eq!(
                            scan.uniform_value(region),
                            table.uniform_value(region),
                            "{region:?}"
                        );
                    }
                }
            }
        }
    }
}
