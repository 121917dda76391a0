//! JWT issue and validation benchmark
//!
//! Compares `Validator::validate_with_algorithm` against a bare
//! `jsonwebtoken::decode` for the same token, so the cost of the claim
//! comparison on top of the codec is visible.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use jsonwebtoken::{DecodingKey, Validation};
use jwtclaims::{Algorithm, Builder, Identity, Key, Validator, WireMap};
use std::time::Duration;

const SECRET: &[u8] = b"benchmark-shared-secret-0123456789abcdef";
const RSA_PRIVATE_PEM: &[u8] = include_bytes!("../tests/fixtures/rsa_private_2048.pem");
const RSA_PUBLIC_PEM: &[u8] = include_bytes!("../tests/fixtures/rsa_public_2048.pem");

/// Keys for signing and verifying with `algorithm`
fn keys(algorithm: Algorithm) -> (Key, Key, DecodingKey) {
    if algorithm.is_symmetric() {
        (
            Key::secret(SECRET),
            Key::secret(SECRET),
            DecodingKey::from_secret(SECRET),
        )
    } else {
        (
            Key::rsa_private_pem(RSA_PRIVATE_PEM),
            Key::rsa_public_pem(RSA_PUBLIC_PEM),
            DecodingKey::from_rsa_pem(RSA_PUBLIC_PEM).unwrap(),
        )
    }
}

fn identity() -> Identity {
    Identity::new("user-1234")
        .issuer("https://auth.example.com")
        .audience("api")
        .token_type("request")
}

fn bench_issue(c: &mut Criterion) {
    let mut group = c.benchmark_group("issue");
    group.throughput(Throughput::Elements(1));

    for algorithm in Algorithm::ALL {
        let (signing, _, _) = keys(algorithm);
        group.bench_function(BenchmarkId::from_parameter(algorithm), |b| {
            b.iter(|| {
                Builder::new_request_token_expiring_in(identity(), 3_600)
                    .encode(black_box(&signing), algorithm)
                    .unwrap()
            })
        });
    }

    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");
    group.throughput(Throughput::Elements(1));
    group.measurement_time(Duration::from_secs(5));

    let validator = Validator::new();
    let expected = Builder::new_matching_token(identity());

    for algorithm in Algorithm::ALL {
        let (signing, verifying, decoding_key) = keys(algorithm);
        let token = Builder::new_request_token_expiring_in(identity(), 3_600)
            .encode(&signing, algorithm)
            .unwrap();

        group.bench_with_input(
            BenchmarkId::new("jwtclaims", algorithm),
            &token,
            |b, token| {
                b.iter(|| {
                    validator
                        .validate_with_algorithm(
                            black_box(token),
                            &verifying,
                            &expected,
                            algorithm,
                        )
                        .unwrap()
                })
            },
        );

        let validation = {
            let mut validation = Validation::new(algorithm.as_str().parse().unwrap());
            validation.validate_aud = false;
            validation
        };
        group.bench_with_input(
            BenchmarkId::new("jsonwebtoken", algorithm),
            &token,
            |b, token| {
                b.iter(|| {
                    jsonwebtoken::decode::<WireMap>(black_box(token), &decoding_key, &validation)
                        .unwrap()
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_issue, bench_validate);
criterion_main!(benches);
