//! Integration tests for lcm-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::{COLLISIONS_FILE, CsvWriter, POSITIONS_FILE};
    use crate::row::{CollisionRow, PositionRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn position(agent_id: u32, tick: u64) -> PositionRow {
        PositionRow { tick, round: 1, agent_id, x: agent_id as i32, y: -(agent_id as i32) }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join(POSITIONS_FILE).exists());
        assert!(dir.path().join(COLLISIONS_FILE).exists());
    }

    #[test]
    fn csv_creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("a").join("b");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join(POSITIONS_FILE).exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(POSITIONS_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["tick", "round", "agent_id", "x", "y"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join(COLLISIONS_FILE)).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["tick", "round", "x", "y"]);
    }

    #[test]
    fn csv_positions_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_positions(&[position(0, 5), position(1, 5), position(2, 5)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(POSITIONS_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "5"); // tick
        assert_eq!(&rows[2][2], "2"); // agent_id
        assert_eq!(&rows[2][4], "-2"); // y
    }

    #[test]
    fn csv_collisions_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_collisions(&[CollisionRow { tick: 9, round: 2, x: -3, y: 4 }]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(COLLISIONS_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].iter().collect::<Vec<_>>(), ["9", "2", "-3", "4"]);
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use lcm_core::{LatticePoint, LcmConfig, Orientation};
    use lcm_policy::{DecisionPolicy, FixedWalk, Idle};
    use lcm_sim::{RoundObserver, SchedulerBuilder};

    use crate::row::{CollisionRow, PositionRow};
    use crate::writer::OutputWriter;
    use crate::{CsvWriter, OutputError, OutputResult, TrajectoryObserver};

    /// In-memory writer that can be told to fail.
    #[derive(Default)]
    struct MemoryWriter {
        positions:  Vec<PositionRow>,
        collisions: Vec<CollisionRow>,
        fail:       bool,
        finished:   usize,
    }

    impl OutputWriter for MemoryWriter {
        fn write_positions(&mut self, rows: &[PositionRow]) -> OutputResult<()> {
            if self.fail {
                return Err(OutputError::Io(std::io::Error::other("disk full")));
            }
            self.positions.extend_from_slice(rows);
            Ok(())
        }

        fn write_collisions(&mut self, rows: &[CollisionRow]) -> OutputResult<()> {
            self.collisions.extend_from_slice(rows);
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    fn mirrored_walker() -> lcm_sim::Scheduler {
        let policies: Vec<Box<dyn DecisionPolicy>> =
            vec![Box::new(Idle), Box::new(FixedWalk::new(3, -2))];
        let config = LcmConfig { error_on_collision: false, ..LcmConfig::default() };
        SchedulerBuilder::new(config, policies)
            .orientations(vec![Orientation::Aligned, Orientation::Mirrored])
            .build()
            .unwrap()
    }

    #[test]
    fn commits_become_position_rows() {
        let mut sched = mirrored_walker();
        let mut obs = TrajectoryObserver::new(MemoryWriter::default());
        obs.record_initial(&sched);
        sched.start();
        sched.run_ticks(6, &mut obs);
        obs.finish().unwrap();

        assert_eq!(obs.positions_written(), 8);
        let w = obs.into_writer();
        assert_eq!(w.finished, 1);
        let agent_1: Vec<(u64, i32, i32)> = w
            .positions
            .iter()
            .filter(|r| r.agent_id == 1)
            .map(|r| (r.tick, r.x, r.y))
            .collect();
        assert_eq!(agent_1, vec![(0, 0, 0), (4, -1, -1), (5, -2, -2), (6, -3, -2)]);
        // The shared origin at construction is not replayed as a collision row.
        assert!(w.collisions.is_empty());
    }

    #[test]
    fn collisions_become_collision_rows() {
        let policies: Vec<Box<dyn DecisionPolicy>> =
            vec![Box::new(FixedWalk::new(1, 0)), Box::new(FixedWalk::new(-1, 0))];
        let mut sched = SchedulerBuilder::new(LcmConfig::default(), policies)
            .initial_positions(vec![LatticePoint::new(0, 0), LatticePoint::new(2, 0)])
            .build()
            .unwrap();
        let mut obs = TrajectoryObserver::new(MemoryWriter::default());
        sched.start();
        sched.run_until_terminal(100, &mut obs);

        assert_eq!(obs.collisions_written(), 1);
        let w = obs.into_writer();
        assert_eq!(w.collisions, vec![CollisionRow { tick: 4, round: 1, x: 1, y: 0 }]);
    }

    #[test]
    fn first_write_error_is_kept() {
        let mut obs = TrajectoryObserver::new(MemoryWriter { fail: true, ..Default::default() });
        obs.on_commit(lcm_core::Tick(1), 1, &[LatticePoint::ORIGIN]);
        obs.on_commit(lcm_core::Tick(2), 1, &[LatticePoint::ORIGIN]);
        assert_eq!(obs.positions_written(), 0);
        assert!(matches!(obs.take_error(), Some(OutputError::Io(_))));
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn finish_reports_stored_error() {
        let mut obs = TrajectoryObserver::new(MemoryWriter { fail: true, ..Default::default() });
        obs.on_commit(lcm_core::Tick(1), 1, &[LatticePoint::ORIGIN]);
        assert!(obs.finish().is_err());
        assert!(obs.finish().is_ok());
    }

    #[test]
    fn integration_csv() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let mut sched = mirrored_walker();
        let mut obs = TrajectoryObserver::new(CsvWriter::new(dir.path()).unwrap());
        obs.record_initial(&sched);
        sched.start();
        sched.run_ticks(20, &mut obs);
        obs.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("positions.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len() as u64, obs.positions_written());
        let last = rows.last().unwrap();
        assert_eq!(&last[2], "1");
    }
}
