use criterion::{black_box, criterion_group, criterion_main, Criterion};
use revm_ecpairing::{
    bn254::{pairing, read_g1_point, read_g2_point, G2Prepared, G1_LEN, PAIR_ELEMENT_LEN},
    ecpairing::pair::{ISTANBUL_PAIR_BASE, ISTANBUL_PAIR_PER_POINT},
    run_pair,
};

/// Benchmarks the pairing precompile and its building blocks.
pub fn benchmark_ecpairing(c: &mut Criterion) {
    let mut group = c.benchmark_group("ecPairing benchmarks");
    let group_name = |description: &str| format!("ecpairing bench | {description}");

    // set up ecpairing input
    let input = hex::decode(
        "\
        1c76476f4def4bb94541d57ebba1193381ffa7aa76ada664dd31c16024c43f59\
        3034dd2920f673e204fee2811c678745fc819b55d3e9d294e45c9b03a76aef41\
        209dd15ebff5d46c4bd888e51a93cf99a7329636c63514396b4a452003a35bf7\
        04bf11ca01483bfa8b34b43561848d28905960114c8ac04049af4b6315a41678\
        2bb8324af6cfc93537a2ad1a445cfd0ca2a71acd7ac41fadbf933c2a51be344d\
        120a2a4cf30c1bf9845f20c6fe39e07ea2cce61f0c9bb048165fe5e4de877550\
        111e129f1cf1097710d41c4ac70fcdfa5ba2023c6ff1cbeac322de49d1b6df7c\
        2032c61a830e3c17286de9462bf242fca2883585b93870a73853face6a6bf411\
        198e9393920d483a7260bfb731fb5d25f1aa493335a9e71297e485b7aef312c2\
        1800deef121f1e76426a00665e5c4479674322d4f75edadd46debd5cd992f6ed\
        090689d0585ff075ec9e99ad690c3395bc4b313370b38ef355acdadcd122975b\
        12c85ea5db8c6deb4aab71808dcb408fe3d1e7690c43d37b4ce6cc0166fa7daa",
    )
    .unwrap();

    let res = run_pair(
        &input,
        ISTANBUL_PAIR_PER_POINT,
        ISTANBUL_PAIR_BASE,
        u64::MAX,
    )
    .unwrap()
    .gas_used;

    println!("gas used by regular pairing call: {:?}", res);

    let p = read_g1_point(&input[..G1_LEN]).unwrap();
    let q = read_g2_point(&input[G1_LEN..PAIR_ELEMENT_LEN]).unwrap();

    group.bench_function(group_name("ecpairing precompile"), |b| {
        b.iter(|| {
            run_pair(
                black_box(&input),
                ISTANBUL_PAIR_PER_POINT,
                ISTANBUL_PAIR_BASE,
                u64::MAX,
            )
            .unwrap();
            black_box(())
        })
    });

    group.bench_function(group_name("g2 decode with subgroup check"), |b| {
        b.iter(|| black_box(read_g2_point(black_box(&input[G1_LEN..PAIR_ELEMENT_LEN])).unwrap()))
    });

    group.bench_function(group_name("line coefficient precomputation"), |b| {
        b.iter(|| black_box(G2Prepared::from(black_box(q))))
    });

    group.bench_function(group_name("single pairing"), |b| {
        b.iter(|| black_box(pairing(black_box(&p), black_box(&q))))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = benchmark_ecpairing
}
criterion_main!(benches);
