//! CRD parser tests
#[cfg(test)]
mod test {
    use crate::prelude::*;
    use crate::tests::toolkit::resource;
    use std::str::FromStr;

    #[test]
    fn normal_points() {
        let path = resource("CRD", "yarl_20210728.npt");
        let crd = CRD::from_path(&path);
        assert!(
            crd.is_ok(),
            "failed to parse yarl_20210728.npt: {:?}",
            crd.err()
        );

        let crd = crd.unwrap();
        assert_eq!(crd.nb_units(), 1);

        let unit = &crd.units[0];
        assert_eq!(unit.format, "CRD");
        assert_eq!(unit.version, "2");
        assert_eq!(unit.created, Epoch::from_gregorian_utc_hms(2021, 7, 28, 16, 0, 0));
        assert_eq!(unit.nb_sessions(), 2);
        assert_eq!(unit.nb_ranges(), 8);

        let station = unit.station.as_ref().unwrap();
        assert_eq!(station.name, "YARL");
        assert_eq!(station.id, 7090);
        assert_eq!(station.system, 5);
        assert_eq!(station.occupancy, 13);
        assert_eq!(station.timescale, 7);

        for (index, session) in unit.sessions().enumerate() {
            assert!(session.is_closed());
            assert_eq!(session.station().unwrap().name, "YARL");
            match index {
                0 => {
                    assert_eq!(
                        session.start,
                        Some(Epoch::from_gregorian_utc_hms(2021, 7, 28, 16, 5, 37))
                    );
                    assert_eq!(
                        session.end,
                        Some(Epoch::from_gregorian_utc_hms(2021, 7, 28, 16, 12, 43))
                    );
                    assert_eq!(session.duration(), Some(Duration::from_seconds(426.0)));
                    assert_eq!(
                        session.flags,
                        SessionFlags {
                            troposphere_corrected: 0,
                            center_of_mass_corrected: 0,
                            receive_amplitude_corrected: 0,
                            station_delay_corrected: 1,
                            spacecraft_delay_corrected: 0,
                            range_type: 2,
                            data_quality: 0,
                        }
                    );

                    let target = session.target().unwrap();
                    assert_eq!(target.name, "LAGEOS1");
                    assert_eq!(target.id, 7603901);
                    assert_eq!(target.sic, 1155);
                    assert_eq!(target.norad, 8820);

                    let ranges = session.ranges().copied().collect::<Vec<_>>();
                    assert_eq!(ranges.len(), 5);
                    assert_eq!(
                        ranges[0],
                        RangePoint {
                            time: 58000.1,
                            range: 0.047257925859,
                        }
                    );
                    assert_eq!(
                        ranges[4],
                        RangePoint {
                            time: 58120.1,
                            range: 0.047492950291,
                        }
                    );
                },
                1 => {
                    // session level target
                    assert!(session.target.is_some());
                    assert_eq!(session.target().unwrap().name, "AJISAI");
                    assert_eq!(session.target().unwrap().norad, 16908);
                    assert_eq!(session.unit().target.as_ref().unwrap().name, "LAGEOS1");
                    assert_eq!(session.nb_ranges(), 3);
                },
                _ => panic!("found unexpected session #{}", index),
            }
        }
    }

    #[test]
    fn multi_unit() {
        let path = resource("CRD", "multi_unit.frd");
        let crd = CRD::from_file(&path.to_string_lossy()).unwrap();

        assert_eq!(crd.nb_units(), 2);
        assert_eq!(crd.sessions().count(), 3);

        let unit = &crd.units[0];
        assert_eq!(unit.nb_sessions(), 2);

        // session level station overrides the unit one
        let session = unit.session(0).unwrap();
        assert_eq!(session.station().unwrap().name, "GRZL");
        assert_eq!(session.station().unwrap().id, 7839);
        assert_eq!(session.target().unwrap().name, "LAGEOS1");
        assert_eq!(unit.station.as_ref().unwrap().name, "YARL");

        // 10 and 12 records
        assert_eq!(session.nb_ranges(), 5);
        assert_eq!(session.ranges().last().unwrap().time, 58000.5);

        // inherited from unit, unspecified end
        let session = unit.session(1).unwrap();
        assert_eq!(session.station().unwrap().name, "YARL");
        assert_eq!(
            session.start,
            Some(Epoch::from_gregorian_utc_hms(2021, 7, 28, 17, 0, 0))
        );
        assert!(session.end.is_none());
        assert!(session.duration().is_none());
        assert_eq!(session.nb_ranges(), 2);
        assert!(unit.session(2).is_none());

        // lowercase unit, without any station
        let unit = &crd.units[1];
        assert_eq!(unit.created, Epoch::from_gregorian_utc_hms(2021, 7, 29, 3, 0, 0));
        let session = unit.session(0).unwrap();
        assert_eq!(session.target().unwrap().name, "AJISAI");
        assert!(matches!(
            session.station(),
            Err(Error::MissingMetadata(Metadata::Station))
        ));
        assert_eq!(session.nb_ranges(), 3);
        assert_eq!(
            session.ranges().map(|r| r.time).collect::<Vec<_>>(),
            vec![11400.0, 11401.0, 11402.0]
        );
    }

    #[test]
    fn missing_file() {
        let path = resource("CRD", "does_not_exist.npt");
        assert!(matches!(CRD::from_path(&path), Err(Error::Io(_))));
    }

    #[test]
    fn ranges_outside_session() {
        // accumulated then attached to the next closed session
        let crd = CRD::from_str(
            "H1 CRD  2 2021 07 28 16
10 100.0 0.25 STD1 2 2 0 0 0 0
H4  0 2021 07 28 16 05 37 2021 07 28 16 12 43  0 0 0 0 1 0 2 0
10 200.0 0.5 STD1 2 2 0 0 0 0
H8
H9",
        )
        .unwrap();
        let session = crd.units[0].session(0).unwrap();
        assert_eq!(
            session.ranges().map(|r| r.time).collect::<Vec<_>>(),
            vec![100.0, 200.0]
        );
    }

    #[test]
    fn empty_content() {
        let crd = CRD::from_str("").unwrap();
        assert_eq!(crd.nb_units(), 0);
        assert_eq!(crd.sessions().count(), 0);
    }

    #[test]
    #[cfg(feature = "serde")]
    fn serde_json() {
        let path = resource("CRD", "multi_unit.frd");
        let crd = CRD::from_path(&path).unwrap();
        let content = serde_json::to_string(&crd).unwrap();
        let parsed: CRD = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, crd);
    }
}
