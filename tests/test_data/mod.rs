//! Test data generation utilities
//!
//! Provides sample log content for every supported benchmark source plus
//! helpers to lay the files out the way a benchmark run leaves them.

use std::fs;
use std::path::{Path, PathBuf};

/// Two iostat sample blocks preceded by the file header
pub fn iostat_content() -> &'static str {
    "Linux 2.6.32-5-amd64 (dbserver) \t04/20/11 \t_x86_64_\n\
     \n\
     avg-cpu:  %user   %nice %system %iowait  %steal   %idle\n\
     \x20          0.50    0.00    0.25    0.12    0.00   99.13\n\
     \n\
     Device:            tps   Blk_read/s   Blk_wrtn/s   Blk_read   Blk_wrtn\n\
     sda               1.50        12.00        24.00      12000      24000\n\
     sdb               0.25         2.00         4.00       2000       4000\n\
     \n\
     avg-cpu:  %user   %nice %system %iowait  %steal   %idle\n\
     \x20          1.00    0.00    0.50    0.25    0.00   98.25\n\
     \n\
     Device:            tps   Blk_read/s   Blk_wrtn/s   Blk_read   Blk_wrtn\n\
     sda               2.00        16.00        32.00      12800      25600\n\
     sdb               0.25         2.00         4.00       2016       4032\n"
}

/// One vmstat header pair with two sample rows
pub fn vmstat_content() -> &'static str {
    "procs -----------memory---------- ---swap-- -----io---- -system-- ----cpu----\n\
     \x20r  b   swpd   free   buff  cache   si   so    bi    bo   in   cs us sy id wa\n\
     \x202  0      0 100000  20000 300000    0    0     5    10  100  200  5  2 93  0\n\
     \x201  0      0  99000  20000 300500    0    0     6    12  110  210  6  2 92  0\n"
}

pub fn latency_content() -> &'static str {
    "1 12.5\n2 13.0\n3 11.75\n"
}

pub fn qps_content() -> &'static str {
    "1 520\n2 534\n3 498\n"
}

/// Two counter blocks with both numeric sub-formats and END markers
pub fn rdbstats_content() -> &'static str {
    "STAT io_reads_started 100\n\
     STAT io_reads_completed 95\n\
     STAT io_writes_started 60\n\
     STAT io_writes_completed 58\n\
     STAT transactions_started 20\n\
     STAT transactions_ready 18\n\
     STAT transactions_completed 17\n\
     STAT bufs_acquired 500\n\
     STAT bufs_ready 490\n\
     STAT bufs_released 480\n\
     STAT blocks_dirty 4096 (average of 5)\n\
     STAT cpu_util 0.75 (5/5)\n\
     END\n\
     STAT io_reads_started 110\n\
     STAT io_reads_completed 104\n\
     STAT io_writes_started 70\n\
     STAT io_writes_completed 69\n\
     STAT transactions_started 25\n\
     STAT transactions_ready 22\n\
     STAT transactions_completed 21\n\
     STAT bufs_acquired 550\n\
     STAT bufs_ready 541\n\
     STAT bufs_released 530\n\
     STAT blocks_dirty 4100 (average of 5)\n\
     STAT cpu_util 0.80 (5/5)\n\
     END\n"
}

/// Write one source file into `dir` and return its path
pub fn write_source(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write test log file");
    path
}

/// Lay out a complete benchmark run directory with all five sources
pub fn write_run_directory(dir: &Path) {
    write_source(dir, "iostat", iostat_content());
    write_source(dir, "vmstat", vmstat_content());
    write_source(dir, "latency", latency_content());
    write_source(dir, "qps", qps_content());
    write_source(dir, "rdbstat", rdbstats_content());
}
